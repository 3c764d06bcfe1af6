//! High-level flow: existence check → upload → public URL.
//!
//! This module drives one upload against any [`ObjectStore`]:
//!   - Unless forced, asks the store whether an object already sits at the key
//!   - Uploads the whole payload with its sniffed content type
//!   - Builds the public URL for the uploaded object
//!
//! # Responsibilities
//! - At most one lookup and one upload, in that order, never retried
//! - Only a successful lookup counts as "exists"; lookup errors are logged and ignored
//! - An existing object is a normal outcome ([`ShootOutcome::AlreadyExists`]), not an error
//!
//! # Callable From
//! - The CLI crate with the S3-backed store
//! - Integration tests with `MockObjectStore`

use tracing::{debug, error, info};

use crate::config::ShootConfig;
use crate::contract::{ObjectLocation, ObjectStore, PutObject};
use crate::error::ShootError;
use crate::payload::Payload;

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShootOutcome {
    /// The object was uploaded and is reachable at `url`.
    Uploaded { key: String, url: String },
    /// An object already exists at `key`; nothing was uploaded.
    AlreadyExists { key: String },
}

/// Public URL of an object in the default S3 endpoint format.
///
/// The format does not follow a custom endpoint.
pub fn public_url(region: &str, bucket: &str, key: &str) -> String {
    format!("https://s3-{region}.amazonaws.com/{bucket}/{key}")
}

/// Upload `payload` to the location described by `config`.
pub async fn shoot<S>(
    store: &S,
    config: &ShootConfig,
    payload: Payload,
) -> Result<ShootOutcome, ShootError>
where
    S: ObjectStore + ?Sized,
{
    let location = ObjectLocation::new(config.bucket.clone(), config.key.clone());

    if !config.force {
        match store.head_object(&location).await {
            Ok(head) => {
                info!(
                    bucket = %location.bucket,
                    key = %location.key,
                    content_type = ?head.content_type,
                    content_length = ?head.content_length,
                    "Object already exists, skipping upload"
                );
                return Ok(ShootOutcome::AlreadyExists { key: location.key });
            }
            Err(e) => {
                debug!(error = %e, key = %location.key, "Lookup failed, treating object as absent");
            }
        }
    }

    info!(
        bucket = %location.bucket,
        key = %location.key,
        content_type = payload.content_type,
        bytes = payload.content_length,
        "Uploading object"
    );

    let request = PutObject {
        location: location.clone(),
        path: payload.path,
        content_length: payload.content_length,
        content_type: payload.content_type.to_string(),
    };

    if let Err(e) = store.put_object(request).await {
        error!(error = %e, key = %location.key, "Upload failed");
        return Err(ShootError::Upload(e));
    }

    let url = public_url(&config.region, &location.bucket, &location.key);
    info!(%url, "Upload complete");

    Ok(ShootOutcome::Uploaded {
        key: location.key,
        url,
    })
}
