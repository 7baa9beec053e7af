//! Core contracts for the fuzzbound workspace.
//!
//! This crate defines the [`Membership`] trait — the single evaluation
//! contract through which transform code consumes any fuzzy-set family —
//! and the [`constraint`] module, which enforces numeric shape-parameter
//! invariants at construction time.

pub mod constraint;
mod membership;

pub use membership::Membership;
