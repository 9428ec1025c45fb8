mod analyze;
mod github;
mod model;
mod report;
mod utils;

use crate::analyze::Aggregator;
use crate::github::ActivityFetcher;
use crate::report::ActivityReport;
use crate::utils::ProgressStyleTemplate;
use clap::Parser;
use indicatif::ProgressBar;
use model::{Event, Result};
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
struct Args {
    username: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let events = fetch_events(&args.username).await?;

    let stats = events.aggregate();
    let statistics = stats.report_lines();
    if !statistics.is_empty() {
        println!("{}", statistics.join("\n"));
    }
    Ok(())
}

async fn fetch_events(username: &str) -> Result<Vec<Event>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyleTemplate::only_message());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching activity for `{username}` ..."));

    let client = reqwest::Client::builder()
        .user_agent("github-activity")
        .build()?;
    let events = client.fetch_activity(username).await?;

    match events.iter().map(|event| event.created_at).min() {
        Some(oldest) => pb.finish_with_message(format!(
            "✅ Completed fetch activity (find {} events since {})",
            events.len(),
            oldest.format("%d.%m.%Y")
        )),
        None => pb.finish_with_message("✅ Completed fetch activity (find 0 events)"),
    }
    Ok(events)
}
