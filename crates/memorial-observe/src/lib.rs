//! Logging and trace export setup for the memorial client.

pub mod tracing_setup;
