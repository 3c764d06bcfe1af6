use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::ShootError;
use crate::sniff::{detect_content_type, SNIFF_LEN};

/// The local file, checked and classified. The body itself is streamed at upload time.
#[derive(Debug, Clone)]
pub struct Payload {
    pub path: PathBuf,
    /// File size in bytes at the time it was read.
    pub content_length: u64,
    pub content_type: &'static str,
}

impl Payload {
    /// Open the file, read at most [`SNIFF_LEN`] bytes and sniff its content type.
    ///
    /// The file handle is closed before this returns, on success and on error.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ShootError> {
        let path = path.as_ref();
        let read_error = |e: std::io::Error| {
            error!(error = ?e, path = ?path, "Failed to read file");
            ShootError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        };

        let file = File::open(path).map_err(|e| {
            error!(error = ?e, path = ?path, "Failed to open file");
            match e.kind() {
                ErrorKind::NotFound => ShootError::FileNotFound {
                    path: path.to_path_buf(),
                },
                _ => ShootError::Read {
                    path: path.to_path_buf(),
                    source: e,
                },
            }
        })?;

        let content_length = file.metadata().map_err(read_error)?.len();

        let mut head = Vec::with_capacity(SNIFF_LEN);
        file.take(SNIFF_LEN as u64)
            .read_to_end(&mut head)
            .map_err(read_error)?;

        let content_type = detect_content_type(&head);
        info!(path = ?path, bytes = content_length, content_type, "Read file");

        Ok(Self {
            path: path.to_path_buf(),
            content_length,
            content_type,
        })
    }
}
