// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG=debug shows the HTTP request)
// 2. Parse command-line arguments using clap
// 3. Fetch and format the user's recent activity
// 4. Print the lines, or the error
// 5. Exit with proper code (0 = success, 1 = any error)
//
// There is no async runtime: the program makes one blocking HTTP request.
// =============================================================================

mod activity;
mod cli;
mod error;
mod github;

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use cli::Cli;
use github::{ActivityFetcher, FetcherConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let success = matches!(
                e.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            );
            // If even printing fails there is nothing left to report to
            let _ = e.print();
            return if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(err) = e.downcast_ref::<error::ActivityError>() {
                log::debug!(
                    "{:?} (retriable: {}): {}",
                    err.kind(),
                    err.kind().is_retriable(),
                    err
                );
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let fetcher = ActivityFetcher::with_config(FetcherConfig {
        base_url: cli.api_url.clone(),
        ..FetcherConfig::default()
    })?;

    let username = cli.username.trim();
    let lines = activity::recent_activity(&fetcher, username)?;

    print_activity(username, &lines, cli.json)
}

fn print_activity(username: &str, lines: &[String], json: bool) -> Result<()> {
    if json {
        // A plain array of the same lines the list view prints
        println!("{}", serde_json::to_string_pretty(lines)?);
    } else if lines.is_empty() {
        println!("No recent activity found for '{}'.", username);
    } else {
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why ExitCode instead of std::process::exit()?
//    - Returning ExitCode from main lets destructors run before the process ends
//    - ExitCode::SUCCESS is 0, ExitCode::FAILURE is 1
//
// 2. What is downcast_ref?
//    - anyhow::Error can hold any error type
//    - downcast_ref::<T>() gives back a &T if the error really is a T
//
// 3. Why Cli::try_parse instead of Cli::parse?
//    - parse() exits with code 2 on bad arguments
//    - try_parse() hands us the error so every failure exits with 1
// -----------------------------------------------------------------------------
