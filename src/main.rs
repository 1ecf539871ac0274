mod analysis;
mod api;
mod cli;
mod config;
mod display;
mod error;
mod export;
mod history;
mod identity;
mod prompt;
mod report;

use api::client::RiotApiClient;
use clap::Parser;
use cli::Args;
use config::Config;
use display::output::{
    display_champion_report, display_error, display_info, display_ranked, display_success,
};
use error::AppError;
use prompt::Prompter;
use report::{build_report, ReportOptions};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut prompter = Prompter::stdio();

    let top_n = args.top_n()?;
    let config = Config::from_env(args.region.as_deref(), || prompter.api_key())?;
    let riot_id = args.riot_id(&mut prompter)?;
    let match_count = args.match_count(&mut prompter)?;

    display_info(&format!(
        "Fetching data for {} in region {}",
        riot_id, config.platform
    ));

    let client = RiotApiClient::new(config)?;
    let options = ReportOptions {
        match_count,
        match_type: args.match_type.clone(),
        top_n,
        include_ranked: !args.skip_ranked,
        show_progress: true,
    };

    let Some(report) = build_report(&client, &riot_id, &options)? else {
        display_info("No matches found for this PUUID.");
        return Ok(());
    };

    display_champion_report(&report.identity, &report.scan, &report.top);
    if !args.skip_ranked {
        display_ranked(report.ranked.as_ref());
    }

    if args.wants_csv(&report.top, &mut prompter)? {
        export::export_csv(&args.csv_path, &report.top)?;
        display_success(&format!("Saved {}", args.csv_path.display()));
    }

    Ok(())
}
