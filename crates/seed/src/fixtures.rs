//! Seed record sets.
//!
//! Each table's literal records live in `fixtures/<table>.json` as a JSON
//! array of objects keyed by column name. The files are compiled in, and
//! can be swapped at runtime by pointing `SEED_FIXTURES_DIR` at a
//! directory holding files of the same names.

use std::path::Path;

use awj_core::Record;

use crate::catalog::Domain;
use crate::error::SeedError;

/// Built-in fixture text for `domain`, if it seeds any rows.
pub fn embedded(domain: Domain) -> Option<&'static str> {
    match domain {
        Domain::Projects => Some(include_str!("../fixtures/projects.json")),
        Domain::Packages => Some(include_str!("../fixtures/packages.json")),
        Domain::PackagesServer => Some(include_str!("../fixtures/packages_server.json")),
        Domain::Services => Some(include_str!("../fixtures/services.json")),
        Domain::Reviews => Some(include_str!("../fixtures/reviews.json")),
        Domain::TeamMembers => Some(include_str!("../fixtures/team_members.json")),
        Domain::ContactRequests => None,
    }
}

/// Load the records for `domain`.
///
/// With `dir` set, `<dir>/<table>.json` is read when present; a missing
/// file falls back to the built-in copy.
pub fn load(domain: Domain, dir: Option<&Path>) -> Result<Vec<Record>, SeedError> {
    let table = domain.table();

    if let Some(dir) = dir {
        let path = dir.join(format!("{table}.json"));
        if path.is_file() {
            tracing::debug!(table, path = %path.display(), "Reading fixture from disk");
            let text = std::fs::read_to_string(&path)
                .map_err(|source| SeedError::FixtureIo { path, source })?;
            return parse(table, &text);
        }
    }

    match embedded(domain) {
        Some(text) => parse(table, text),
        None => Ok(Vec::new()),
    }
}

pub fn parse(table: &'static str, text: &str) -> Result<Vec<Record>, SeedError> {
    serde_json::from_str(text).map_err(|source| SeedError::Fixture { table, source })
}
