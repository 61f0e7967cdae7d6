//! CLI 명령 파싱 모듈.

use clap::Parser;

use crate::domain::comment::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "coverage-comment", version)]
#[command(about = "Post or update a coverage summary comment on a GitHub pull request or commit")]
#[command(
    long_about = "Post or update a coverage summary comment on a GitHub pull request or commit.\n\n\
Reads GITHUB_TOKEN, GITHUB_REPOSITORY, GITHUB_SHA (required) and GITHUB_API_URL, \
COVERAGE_TOTAL, COVERAGE_DETAILS, MIN_COVERAGE (optional) from the environment."
)]
pub struct Cli {
    /// Print the rendered comment to stdout, do not post
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    pub fn parse_options() -> RunOptions {
        let cli = Cli::parse();
        RunOptions {
            dry_run: cli.dry_run,
        }
    }
}
