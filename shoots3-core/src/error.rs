use std::path::PathBuf;

use thiserror::Error;

use crate::contract::StoreError;

/// Everything that can make a `shoot` run fail.
///
/// An object that already exists is not an error; see [`crate::shoot::ShootOutcome`].
#[derive(Debug, Error)]
pub enum ShootError {
    /// Neither a flag nor the named environment variable supplied a value.
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("File does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to upload your file: {0}")]
    Upload(#[source] StoreError),
}
