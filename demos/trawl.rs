//! Crawl a listing page and download its files, stopping cleanly on Ctrl-C.
//!
//! ```text
//! cargo run --example trawl -- <page-url> <directory> [--usa] [start-index]
//! ```

use color_eyre::{eyre::eyre, Result};
use std::io::{self, BufRead, Write};
use trawl::{
    format_size, progress_callback, Crawler, DownloaderBuilder, HttpClientConfig, ProgressEvent,
    RunInputs, SessionController, SessionState, StartIndex,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut only_region = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--usa" => only_region = true,
            _ => positional.push(arg),
        }
    }
    let [url, directory, rest @ ..] = positional.as_slice() else {
        return Err(eyre!(
            "usage: trawl <page-url> <directory> [--usa] [start-index]"
        ));
    };

    let inputs = RunInputs::new(url, directory, only_region)?;
    let listing = Crawler::new(HttpClientConfig::default())?
        .crawl(inputs.page_url(), &inputs.filter())
        .await?
        .ensure_not_empty()?;

    print!("{} [y/N] ", listing.confirmation_prompt());
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let start = StartIndex::parse(rest.first().map_or("1", String::as_str), listing.len());
    let session = SessionController::new();
    session.start(
        DownloaderBuilder::new()
            .directory(inputs.directory().to_path_buf())
            .build(),
        listing.into_records(),
        start,
        progress_callback(|event| match event {
            // The progress bars already show the current file.
            ProgressEvent::Downloading { .. } => {}
            other => println!("{other}"),
        }),
    )?;

    let mut state = session.subscribe();
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            session.request_cancel();
        }
        _ = state.wait_for(|s| *s == SessionState::Idle) => {}
    }

    if let Some(outcome) = session.wait().await {
        let report = outcome?;
        println!(
            "\nDownloaded {} files ({}).",
            report.downloaded_count(),
            format_size(report.downloaded_bytes())
        );
    }

    Ok(())
}
