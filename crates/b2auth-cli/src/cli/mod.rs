//! CLI for building and inspecting download authorizations.

mod commands;

use anyhow::Result;
use b2auth_core::config::{self, B2AuthConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{run_disposition, run_request, run_response, RequestArgs};

/// Top-level CLI for b2auth.
#[derive(Debug, Parser)]
#[command(name = "b2auth")]
#[command(about = "b2auth: build and inspect B2 download authorizations", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/b2auth/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the JSON body of a download authorization request.
    Request {
        /// Bucket that holds the files.
        #[arg(long)]
        bucket_id: String,
        /// File name prefix the token should cover.
        #[arg(long)]
        file_name: String,
        /// Seconds until the token expires (1 to 604800). Defaults to the config value.
        #[arg(long, value_name = "SECS", allow_negative_numbers = true)]
        duration: Option<i64>,
        /// Content-Disposition to serve the files with, e.g. 'attachment; filename="a.pdf"'.
        #[arg(long, value_name = "VALUE")]
        disposition: Option<String>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Parse a download authorization response (file path or '-' for stdin).
    Response {
        /// Path to the JSON payload, or '-' to read stdin.
        path: String,
        /// Bucket name used to build the authorized URL (requires --file).
        #[arg(long, requires = "file")]
        bucket_name: Option<String>,
        /// File under the authorized prefix to build a URL for.
        #[arg(long, requires = "bucket_name")]
        file: Option<String>,
    },

    /// Parse a Content-Disposition value and print its canonical form.
    Disposition {
        /// Raw header value.
        value: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        dispatch(Cli::parse())
    }
}

/// Config from `--config`, or the default location (created if missing).
fn load_config(path: Option<&Path>) -> Result<B2AuthConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Runs a parsed command line. Only `request` reads the config.
fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        CliCommand::Request {
            bucket_id,
            file_name,
            duration,
            disposition,
            pretty,
        } => {
            let cfg = load_config(cli.config.as_deref())?;
            let args = RequestArgs {
                bucket_id,
                file_name,
                duration,
                disposition,
            };
            run_request(&cfg, &args, pretty)?;
        }
        CliCommand::Response {
            path,
            bucket_name,
            file,
        } => {
            let target = bucket_name.as_deref().zip(file.as_deref());
            run_response(Path::new(&path), target)?;
        }
        CliCommand::Disposition { value } => run_disposition(&value)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
