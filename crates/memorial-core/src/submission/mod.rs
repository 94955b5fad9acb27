//! Memory submission: upload naming and the upload-then-insert workflow.

pub mod naming;
pub mod workflow;
