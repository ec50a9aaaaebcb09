//! Row models for tables written outside the seed loaders.

pub mod contact_request;
