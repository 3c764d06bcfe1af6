#![doc = "S3 integration for the CLI: bridges the core ObjectStore abstraction to aws-sdk-s3."]
//
//! # Storage Integration (CLI <-> Core)
//!
//! This module wires the [`ObjectStore`] trait from `shoots3-core` to a real
//! S3 (or S3-compatible) service.
//!
//! ## Client Usage
//!
//! - Construct [`S3Store`] with [`S3Store::connect`], passing the resolved region and
//!   an optional custom endpoint.
//! - Credentials come from the SDK's default chain (environment, profile, instance role).
//! - The SDK's own retries are switched off: each call is attempted exactly once.
//! - Upload bodies are streamed from disk rather than buffered in memory.

use async_trait::async_trait;

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use shoots3_core::contract::{ObjectHead, ObjectLocation, ObjectStore, PutObject, StoreError};

pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Load the shared AWS config for `region` and build an S3 client.
    ///
    /// A custom endpoint replaces the SDK's endpoint resolution and switches
    /// to path-style addressing, which self-hosted stores such as MinIO expect.
    pub async fn connect(region: &str, endpoint: Option<&str>) -> anyhow::Result<Self> {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(url) = endpoint {
            tracing::info!(endpoint = %url, "Using custom S3 endpoint");
            builder = builder.endpoint_url(url).force_path_style(true);
        }

        tracing::info!(region, "Initialized S3 client");
        Ok(S3Store {
            client: Client::from_conf(builder.build()),
        })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn head_object(&self, location: &ObjectLocation) -> Result<ObjectHead, StoreError> {
        let resp = self
            .client
            .head_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| -> StoreError { DisplayErrorContext(&e).to_string().into() })?;

        Ok(ObjectHead {
            content_type: resp.content_type().map(str::to_owned),
            content_length: resp.content_length(),
        })
    }

    async fn put_object(&self, request: PutObject) -> Result<(), StoreError> {
        let body = ByteStream::from_path(&request.path).await?;

        self.client
            .put_object()
            .bucket(&request.location.bucket)
            .key(&request.location.key)
            .content_type(request.content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| -> StoreError { DisplayErrorContext(&e).to_string().into() })?;

        Ok(())
    }
}
