use crate::cli::Cli;
use crate::fetcher::RetryPolicy;
use std::path::PathBuf;

/// Listing of rule folders in the upstream repository.
pub const REPO_URL: &str = "https://api.github.com/repos/Qwertic/cursorrules/contents/rules";

#[derive(Debug, Clone)]
pub struct Config {
    pub remote_url: Option<String>,
    pub local_dir: PathBuf,
    pub listing_url: String,
    pub retry: RetryPolicy,
}

impl Config {
    /// `default_dir` is used when `--dir` was not given.
    pub fn from_cli(cli: Cli, default_dir: PathBuf) -> Self {
        Self {
            remote_url: cli.url,
            local_dir: cli.dir.unwrap_or(default_dir),
            listing_url: REPO_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}
