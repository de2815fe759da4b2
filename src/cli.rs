// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single positional argument, the GitHub username. Everything
// else is optional.
// =============================================================================

use clap::Parser;

use crate::github::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show a GitHub user's recent public activity",
    long_about = "github-activity fetches the latest public events of a GitHub user \
                  and prints up to ten of them as a short list."
)]
pub struct Cli {
    /// GitHub username (e.g., octocat)
    pub username: String,

    /// Output the activity lines as JSON instead of a list
    #[arg(long)]
    pub json: bool,

    /// Base URL of the users API, mostly useful for testing
    #[arg(
        long,
        env = "GITHUB_ACTIVITY_API_URL",
        default_value = DEFAULT_BASE_URL,
        hide = true
    )]
    pub api_url: String,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does env = "..." do?
//    - If --api-url is not given, clap reads GITHUB_ACTIVITY_API_URL
//    - If that is unset too, default_value is used
//    - Needs the 'env' feature of clap (see Cargo.toml)
//
// 2. What does hide = true do?
//    - The flag still works, it just doesn't show up in --help
//    - Normal users never need to point at anything but api.github.com
//
// 3. Why try_parse_from in the tests?
//    - parse() exits the process on bad input, try_parse_from returns a Result
//    - The first item is the program name, like argv[0]
// -----------------------------------------------------------------------------
