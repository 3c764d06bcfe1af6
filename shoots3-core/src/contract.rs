//! # contract: the narrow interface between the upload flow and object storage
//!
//! The upload flow only ever needs two remote calls: a metadata lookup for
//! an existing object, and a single put of the whole file. Both live behind
//! [`ObjectStore`], so the flow in [`crate::shoot`] can run against the real
//! S3 client in the CLI crate or against a deterministic mock in tests.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`; enable the `test-export-mocks`
//!   feature (on by default) to use `MockObjectStore` from other crates.
//!
//! ## Error contract
//! - Implementations convert every upstream failure into a [`StoreError`].
//! - A `head_object` error carries no meaning beyond "not confirmed to exist".

use std::path::PathBuf;

use async_trait::async_trait;

use mockall::automock;

/// Boxed error returned by store implementations.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Where an object lives: bucket plus key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Metadata returned by a successful lookup.
#[derive(Debug, Clone, Default)]
pub struct ObjectHead {
    pub content_type: Option<String>,
    pub content_length: Option<i64>,
}

/// A single put request. The body is streamed from `path` by the store.
#[derive(Debug, Clone)]
pub struct PutObject {
    pub location: ObjectLocation,
    /// Local file whose complete contents become the object body.
    pub path: PathBuf,
    pub content_length: u64,
    /// MIME type sniffed from the leading bytes of the file.
    pub content_type: String,
}

/// Object storage as seen by the upload flow.
///
/// The trait is implemented by the S3 client in the CLI crate and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Metadata-only lookup. `Ok` means the object exists.
    async fn head_object(&self, location: &ObjectLocation) -> Result<ObjectHead, StoreError>;

    /// Upload the whole file under the request's location, overwriting any existing object.
    async fn put_object(&self, request: PutObject) -> Result<(), StoreError>;
}
