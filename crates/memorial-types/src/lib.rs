//! Shared domain types for the memorial submission client.
//!
//! This crate contains the domain types used across the workspace:
//! draft submissions, tag sets, persisted submission records, form status,
//! clock hand angles, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod clock;
pub mod config;
pub mod error;
pub mod status;
pub mod submission;
pub mod tag;
