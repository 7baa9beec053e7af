//! Shared fixtures for the fuzzbound integration tests.

pub mod scenario;
