use std::{process::ExitCode, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use isnad_core::{presenter, HttpChainFetcher, Phase, SubmissionController};
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
#[command(about = "Look up narrator chains for a thaqalayn.net hadith page")]
struct Args {
    /// Hadith page URL, e.g. https://thaqalayn.net/hadith/5/12
    url: String,
    /// Overrides the configured chains API base URL.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }

    let fetcher = HttpChainFetcher::with_timeout(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_seconds),
    )?;
    let controller = SubmissionController::with_fetcher(Arc::new(fetcher));

    controller.submit(args.url).await;

    let state = controller.snapshot().await;
    for line in presenter::render_lines(&state) {
        println!("{line}");
    }

    Ok(match state.phase {
        Phase::Error { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
