//! `awj-seed` library crate.
//!
//! Catalog loaders for the company site: one per table, each with an
//! explicit reset and conflict policy and a JSON fixture of seed records.
//! The binaries in `src/bin/` are thin wrappers around [`cli::run`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod runner;

pub use catalog::{CatalogLoader, Domain};
pub use config::SeedConfig;
pub use error::SeedError;
pub use runner::{run_all, run_loader};
