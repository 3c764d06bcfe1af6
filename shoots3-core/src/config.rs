use tracing::{debug, error, info};

use crate::error::ShootError;
use crate::keygen::{generate_key, DEFAULT_KEY_LENGTH};

/// Environment variable consulted when no bucket flag is given.
pub const BUCKET_ENV: &str = "SHOOTS3_DEFAULT_BUCKET";
/// Environment variable consulted when no region flag is given.
pub const REGION_ENV: &str = "AWS_REGION";

/// Options as the user gave them. Empty strings count as "not given".
#[derive(Debug, Clone)]
pub struct ShootOptions {
    pub key: Option<String>,
    pub length: usize,
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub force: bool,
}

impl Default for ShootOptions {
    fn default() -> Self {
        Self {
            key: None,
            length: DEFAULT_KEY_LENGTH,
            bucket: None,
            region: None,
            endpoint: None,
            force: false,
        }
    }
}

/// Fully resolved settings for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShootConfig {
    pub key: String,
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub force: bool,
}

impl ShootConfig {
    pub fn trace_loaded(&self) {
        info!(
            key = %self.key,
            bucket = %self.bucket,
            region = %self.region,
            endpoint = self.endpoint.as_deref().unwrap_or("default"),
            force = self.force,
            "Resolved upload config"
        );
        debug!(?self, "Config resolved (full debug)");
    }
}

impl ShootOptions {
    /// Resolve against the process environment.
    pub fn resolve(self) -> Result<ShootConfig, ShootError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` for environment fallbacks.
    ///
    /// The bucket is checked before the region. A key is generated only when none was given.
    pub fn resolve_with<F>(self, lookup: F) -> Result<ShootConfig, ShootError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = match non_empty(self.key) {
            Some(key) => key,
            None => generate_key(self.length),
        };

        let bucket = match non_empty(self.bucket).or_else(|| lookup(BUCKET_ENV)) {
            Some(bucket) => bucket,
            None => {
                error!(var = BUCKET_ENV, "No bucket flag and environment variable not set");
                return Err(ShootError::MissingEnv(BUCKET_ENV));
            }
        };

        let region = match non_empty(self.region).or_else(|| lookup(REGION_ENV)) {
            Some(region) => region,
            None => {
                error!(var = REGION_ENV, "No region flag and environment variable not set");
                return Err(ShootError::MissingEnv(REGION_ENV));
            }
        };

        Ok(ShootConfig {
            key,
            bucket,
            region,
            endpoint: non_empty(self.endpoint),
            force: self.force,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
