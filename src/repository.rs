use crate::error::AppError;
use crate::fetcher::Fetcher;
use crate::types::{DirectoryEntry, RemoteFileEntry};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use std::time::Duration;
use url::Url;

pub const RULES_FILE_NAME: &str = ".cursorrules";

/// Read side of the remote rules repository.
pub struct RulesRepository {
    fetcher: Fetcher,
    listing_url: String,
}

impl RulesRepository {
    pub fn new(fetcher: Fetcher, listing_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            listing_url: listing_url.into(),
        }
    }

    /// Folder names in the order the listing returns them.
    pub async fn list_directories(&self) -> Result<Vec<String>, AppError> {
        let pb = spinner("Fetching directory list...");
        match self.fetcher.get_json::<Vec<DirectoryEntry>>(&self.listing_url).await {
            Ok(entries) => {
                succeed(&pb, "Successfully fetched directory list");
                info!("Listing returned {} directories", entries.len());
                Ok(entries.into_iter().map(|d| d.name).collect())
            }
            Err(e) => {
                fail(&pb, &format!("Error fetching directory list: {}", e));
                error!("Directory listing from {} failed: {}", self.listing_url, e);
                Err(AppError::Connectivity(e))
            }
        }
    }

    /// Locates `.cursorrules` inside `dir_name` and downloads it.
    pub async fn fetch_cursor_rules(&self, dir_name: &str) -> Result<String, AppError> {
        let pb = spinner(&format!("Fetching {} file from {}...", RULES_FILE_NAME, dir_name));
        let dir_url = directory_url(&self.listing_url, dir_name);

        let entries = match self.fetcher.get_json::<Vec<RemoteFileEntry>>(&dir_url).await {
            Ok(entries) => entries,
            Err(e) => {
                fail(&pb, &format!("Error fetching {} file: {}", RULES_FILE_NAME, e));
                error!("Listing {} failed: {}", dir_url, e);
                return Err(AppError::RulesUnavailable(e));
            }
        };

        let download_url = entries
            .into_iter()
            .find(|entry| entry.is_file_named(RULES_FILE_NAME))
            .and_then(|entry| entry.download_url);

        match download_url {
            Some(url) => {
                succeed(&pb, &format!("Found {} file in {}", RULES_FILE_NAME, dir_name));
                self.fetch_remote_file(&url).await
            }
            None => {
                fail(&pb, &format!("No {} file found in {}", RULES_FILE_NAME, dir_name));
                Err(AppError::NotFound(dir_name.to_string()))
            }
        }
    }

    /// Downloads an arbitrary URL as text.
    pub async fn fetch_remote_file(&self, url: &str) -> Result<String, AppError> {
        let pb = spinner("Fetching remote file...");
        match self.fetcher.get_text(url, &pb).await {
            Ok(content) => {
                succeed(&pb, "Successfully fetched remote file");
                Ok(content)
            }
            Err(e) => {
                fail(&pb, &format!("Error fetching remote file: {}", e));
                error!("Download of {} failed: {}", url, e);
                Err(AppError::Download(e))
            }
        }
    }
}

fn directory_url(listing_url: &str, dir_name: &str) -> String {
    if let Ok(mut url) = Url::parse(listing_url) {
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(dir_name);
        }
        return url.into();
    }
    format!("{}/{}", listing_url.trim_end_matches('/'), dir_name)
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn succeed(pb: &ProgressBar, msg: &str) {
    finish(pb, format!("{} {}", "✔".green(), msg));
}

fn fail(pb: &ProgressBar, msg: &str) {
    finish(pb, format!("{} {}", "✖".red(), msg));
}

fn finish(pb: &ProgressBar, line: String) {
    if let Ok(style) = ProgressStyle::with_template("{msg}") {
        pb.set_style(style);
    }
    pb.finish_with_message(line);
}
