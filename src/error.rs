use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch {url} after {attempts} attempts: {source}")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        source: Box<FetchError>,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP status behind this error, looking through retry exhaustion.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            FetchError::Exhausted { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        match self {
            FetchError::RateLimited => true,
            FetchError::Exhausted { source, .. } => source.is_rate_limited(),
            _ => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid URL format. URL must start with http:// or https:// (got {0})")]
    InvalidUrl(String),

    #[error("There was a problem connecting to the GitHub API. Please check your internet connection and try again.")]
    Connectivity(#[source] FetchError),

    #[error("There was a problem fetching the .cursorrules file. Please try again later.")]
    RulesUnavailable(#[source] FetchError),

    #[error("There was a problem downloading the file. Please check your internet connection and try again.")]
    Download(#[source] FetchError),

    #[error("No .cursorrules file found in {0}")]
    NotFound(String),

    #[error("No directories found in the repository.")]
    NoDirectories,

    #[error("The .cursorrules file is empty.")]
    EmptyContent,

    #[error("Directory does not exist: {}", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Permission denied: Unable to write to {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),
}

/// Advice printed under a failure, chosen from the error's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    DiskFull,
    PermissionDenied,
    RateLimited,
    Unexpected,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Hint::DiskFull => "There is not enough space on the disk to save the file.",
            Hint::PermissionDenied => {
                "Permission denied. Try running the command with sudo or as an administrator."
            }
            Hint::RateLimited => "GitHub API rate limit exceeded. Please try again later.",
            Hint::Unexpected => {
                "An unexpected error occurred. Please try again or contact support if the problem persists."
            }
        };
        f.write_str(text)
    }
}

impl AppError {
    pub fn fetch_error(&self) -> Option<&FetchError> {
        match self {
            AppError::Connectivity(e) | AppError::RulesUnavailable(e) | AppError::Download(e) => {
                Some(e)
            }
            _ => None,
        }
    }

    pub fn hint(&self) -> Hint {
        match self {
            AppError::PermissionDenied(_) => Hint::PermissionDenied,
            AppError::Io(e) if e.kind() == io::ErrorKind::StorageFull => Hint::DiskFull,
            AppError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Hint::PermissionDenied
            }
            _ if self.fetch_error().is_some_and(FetchError::is_rate_limited) => Hint::RateLimited,
            _ => Hint::Unexpected,
        }
    }
}
