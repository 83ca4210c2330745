mod app;
mod cli;
mod config;
mod error;
mod fetcher;
mod prompt;
mod repository;
mod types;
mod writer;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, BANNER};
use colored::*;
use config::Config;
use log::info;
use prompt::TerminalSelector;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    println!("{}", BANNER.cyan());

    let code = match working_dir() {
        Ok(cwd) => {
            let config = Config::from_cli(cli, cwd);
            info!(
                "Starting: url={:?}, dir={}",
                config.remote_url,
                config.local_dir.display()
            );
            let mut selector = TerminalSelector::stdio();
            let result =
                app::run_until_interrupted(&config, &mut selector, interrupted()).await;
            app::report(&result)
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };

    // A pending stdin read would block runtime shutdown.
    std::process::exit(code);
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

fn working_dir() -> anyhow::Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current working directory")
}
