//!
//! This module implements the CLI surface of `shoot`: flag parsing, usage
//! output, and the async entrypoint that wires the resolved options to the
//! S3-backed store.
//!
//! All business logic (key generation, sniffing, the upload flow) lives in
//! the [`shoots3-core`] crate. This module is strictly CLI glue.
//!
//! ## How To Use
//! - For command-line users: `shoot [-k key] [-l length] [-b bucket] [-r region] [-f] [-e endpoint] <filename>`.
//! - For programmatic/integration use: call [`run`] with a constructed [`Cli`],
//!   or [`shoot_and_report`] with any [`ObjectStore`] and an output sink.
//!
//! [`shoots3-core`]: ../../shoots3-core/
use crate::storage::S3Store;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use shoots3_core::config::{ShootConfig, ShootOptions};
use shoots3_core::contract::ObjectStore;
use shoots3_core::keygen::DEFAULT_KEY_LENGTH;
use shoots3_core::payload::Payload;
use shoots3_core::shoot::{shoot, ShootOutcome};
use std::io::Write;
use std::path::PathBuf;

/// CLI for shoots3: upload a file to S3 and print its URL.
#[derive(Parser, Debug)]
#[clap(
    name = "shoot",
    version,
    about = "Upload a single file to an S3 bucket and print its public URL"
)]
pub struct Cli {
    /// Custom key
    #[clap(short = 'k', long)]
    pub key: Option<String>,

    /// Generated url length
    #[clap(short = 'l', long, default_value_t = DEFAULT_KEY_LENGTH)]
    pub length: usize,

    /// S3 bucket to upload the file (defaults to $SHOOTS3_DEFAULT_BUCKET)
    #[clap(short = 'b', long)]
    pub bucket: Option<String>,

    /// AWS region (defaults to $AWS_REGION)
    #[clap(short = 'r', long)]
    pub region: Option<String>,

    /// Force override existing file
    #[clap(short = 'f', long)]
    pub force: bool,

    /// Use a custom S3 endpoint (such as a MinIO deployment)
    #[clap(short = 'e', long)]
    pub endpoint: Option<String>,

    /// File to upload; exactly one is accepted. Flags after it are not parsed.
    #[clap(value_name = "FILENAME", num_args = 1.., trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Raw options for resolution in the core crate.
    pub fn options(&self) -> ShootOptions {
        ShootOptions {
            key: self.key.clone(),
            length: self.length,
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            force: self.force,
        }
    }
}

/// Print usage to stdout. Wrong positional counts are not treated as failures.
pub fn print_usage() {
    println!("{}", Cli::command().render_help());
}

/// Async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!(files = cli.files.len(), "trace_initialised");

    let file = match cli.files.as_slice() {
        [file] => file.clone(),
        _ => {
            tracing::warn!(files = cli.files.len(), "Expected exactly one file, printing usage");
            print_usage();
            return Ok(());
        }
    };

    let config = cli.options().resolve()?;
    config.trace_loaded();

    let payload = Payload::read(&file)?;

    let store = S3Store::connect(&config.region, config.endpoint.as_deref()).await?;

    shoot_and_report(&store, &config, payload, &mut std::io::stdout()).await?;

    Ok(())
}

/// The single line printed for an outcome, without the trailing newline.
pub fn report(outcome: &ShootOutcome) -> String {
    match outcome {
        ShootOutcome::Uploaded { url, .. } => url.clone(),
        ShootOutcome::AlreadyExists { key } => {
            format!("File already exists with the same key: {key}")
        }
    }
}

/// Run the upload flow against `store` and write the outcome line to `out`.
pub async fn shoot_and_report<S, W>(
    store: &S,
    config: &ShootConfig,
    payload: Payload,
    out: &mut W,
) -> Result<ShootOutcome>
where
    S: ObjectStore + ?Sized,
    W: Write,
{
    let outcome = shoot(store, config, payload).await?;
    writeln!(out, "{}", report(&outcome))?;
    Ok(outcome)
}
