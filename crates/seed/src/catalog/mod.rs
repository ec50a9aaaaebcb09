//! Catalog loader definitions.
//!
//! Each submodule declares one content domain's table schema together
//! with the reset and conflict policies its loader uses. Policies are
//! always spelled out per table, never inferred.

pub mod contact_requests;
pub mod packages;
pub mod projects;
pub mod reviews;
pub mod services;
pub mod team_members;

use awj_core::{ConflictPolicy, CoreError, ResetPolicy, TableSchema};

/// The tables seeded by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Projects,
    Packages,
    PackagesServer,
    Services,
    Reviews,
    TeamMembers,
    ContactRequests,
}

impl Domain {
    /// Every domain, in the order `awj-seed` runs them.
    pub const ALL: [Domain; 7] = [
        Domain::Projects,
        Domain::Packages,
        Domain::PackagesServer,
        Domain::Services,
        Domain::Reviews,
        Domain::TeamMembers,
        Domain::ContactRequests,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Domain::Projects => "projects",
            Domain::Packages => "packages",
            Domain::PackagesServer => "packages_server",
            Domain::Services => "services",
            Domain::Reviews => "reviews",
            Domain::TeamMembers => "team_members",
            Domain::ContactRequests => "contact_requests",
        }
    }

    pub fn loader(self) -> Result<CatalogLoader, CoreError> {
        match self {
            Domain::Projects => projects::loader(),
            Domain::Packages => packages::loader(),
            Domain::PackagesServer => packages::server_loader(),
            Domain::Services => services::loader(),
            Domain::Reviews => reviews::loader(),
            Domain::TeamMembers => team_members::loader(),
            Domain::ContactRequests => contact_requests::loader(),
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// One table's schema plus the policies its loader runs with.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    pub domain: Domain,
    pub schema: TableSchema,
    pub reset: ResetPolicy,
    pub conflict: ConflictPolicy,
}
