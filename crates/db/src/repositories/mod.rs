//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut SqliteConnection` as the first argument.

pub mod contact_request_repo;

pub use contact_request_repo::ContactRequestRepo;
