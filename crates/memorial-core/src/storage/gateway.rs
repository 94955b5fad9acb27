//! Storage gateway trait.
//!
//! Defines the interface to the hosted backend: one call that stores a blob
//! in a bucket, one that inserts a row into a table. Implementations live in
//! memorial-infra.

use memorial_types::error::GatewayError;
use memorial_types::submission::SubmissionRecord;

/// Trait for the backend-as-a-service boundary.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations own transport, authentication and schema details; callers
/// only see success or a message.
pub trait StorageGateway: Send + Sync {
    /// Store `data` under `name` in `bucket`.
    fn upload_blob(
        &self,
        bucket: &str,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;

    /// Insert one submission row into `table`.
    fn insert_record(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> impl std::future::Future<Output = Result<(), GatewayError>> + Send;
}
