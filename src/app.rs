use crate::config::Config;
use crate::error::{AppError, FetchError};
use crate::fetcher::Fetcher;
use crate::prompt::Selector;
use crate::repository::RulesRepository;
use crate::types::{Outcome, Selection};
use crate::writer::save_local_file;
use colored::*;
use log::{error, info};
use std::error::Error as _;
use std::future::Future;

/// Exit status for a run stopped by Ctrl-C outside the prompt.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Like [`run`], but stops early with `Outcome::Interrupted` once `interrupt`
/// resolves. The run is polled first, so a Ctrl-C the prompt also sees
/// still ends as a plain cancellation.
pub async fn run_until_interrupted<S, F>(
    config: &Config,
    selector: &mut S,
    interrupt: F,
) -> Result<Outcome, AppError>
where
    S: Selector,
    F: Future<Output = ()>,
{
    tokio::select! {
        biased;
        result = run(config, selector) => result,
        _ = interrupt => {
            info!("Interrupted outside the prompt");
            Ok(Outcome::Interrupted)
        }
    }
}

/// Runs one fetch-and-save pass. Operator cancellation is an `Ok` outcome.
pub async fn run<S: Selector>(config: &Config, selector: &mut S) -> Result<Outcome, AppError> {
    if let Some(url) = &config.remote_url {
        validate_url(url)?;
    }

    let fetcher = Fetcher::new(config.retry).map_err(AppError::Connectivity)?;
    let repo = RulesRepository::new(fetcher, config.listing_url.as_str());

    let content = match &config.remote_url {
        Some(url) => {
            info!("Fetching rules directly from {}", url);
            repo.fetch_remote_file(url).await?
        }
        None => {
            let directories = repo.list_directories().await?;
            if directories.is_empty() {
                return Err(AppError::NoDirectories);
            }

            let choice = selector
                .select("Choose a directory:", &directories)
                .await
                .map_err(AppError::Prompt)?;
            match choice {
                Selection::Chosen(dir) => repo.fetch_cursor_rules(&dir).await?,
                Selection::Cancelled => {
                    info!("Selection cancelled by operator");
                    return Ok(Outcome::Cancelled);
                }
            }
        }
    };

    if content.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let path = save_local_file(&content, &config.local_dir).await?;
    Ok(Outcome::Written(path))
}

fn validate_url(url: &str) -> Result<(), AppError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::InvalidUrl(url.to_string()))
    }
}

/// Prints the final status line(s) and returns the process exit code.
pub fn report(result: &Result<Outcome, AppError>) -> i32 {
    match result {
        Ok(Outcome::Written(path)) => {
            println!("File saved to {}", path.display());
            println!("{}", "Successfully created .cursorrules file".green());
            0
        }
        Ok(Outcome::Cancelled) => {
            println!("Operation cancelled by user.");
            0
        }
        Ok(Outcome::Interrupted) => {
            eprintln!("{}", "Operation cancelled by user.".yellow());
            INTERRUPTED_EXIT_CODE
        }
        Err(e) => {
            let mut source = e.source();
            while let Some(cause) = source {
                error!("caused by: {}", cause);
                source = cause.source();
            }
            if let Some(status) = e.fetch_error().and_then(FetchError::status) {
                error!("last HTTP status: {}", status);
            }
            eprintln!("{} {}", "Error:".red().bold(), e);
            eprintln!("{}", e.hint().to_string().yellow());
            1
        }
    }
}
