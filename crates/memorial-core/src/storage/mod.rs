//! Storage abstractions for memory submissions.
//!
//! Defines the gateway trait for blob upload and record insert.
//! Implementations live in memorial-infra.

pub mod gateway;
