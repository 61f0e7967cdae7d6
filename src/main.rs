//! `coverage-comment` 바이너리 진입점.

use coverage_comment::interface::cli::Cli;
use coverage_comment::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let options = Cli::parse_options();
    let composition = AppComposition::default();

    if let Err(err) = composition.post_coverage_usecase().execute(options).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
