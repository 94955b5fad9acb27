//! Form logic and gateway trait definitions for the memorial site.
//!
//! This crate holds the contributor-facing behavior (tag editing, file
//! selection, the clock face, and the submission workflow) and defines the
//! storage "port" that the infrastructure layer implements. It depends only on
//! `memorial-types` -- never on `memorial-infra` or any HTTP crate.

pub mod clock;
pub mod file_select;
pub mod form;
pub mod storage;
pub mod submission;
pub mod tags;

#[cfg(test)]
pub(crate) mod testing;
