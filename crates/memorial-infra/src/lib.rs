//! Infrastructure layer for the memorial client.
//!
//! Contains the implementation of the `StorageGateway` port defined in
//! `memorial-core` (a Supabase REST/storage client), configuration loading,
//! data directory resolution, and local attachment loading.

pub mod config;
pub mod filesystem;
pub mod storage;
pub mod supabase;
