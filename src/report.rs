use crate::analysis::champion_stats::ChampionStats;
use crate::analysis::ranked::{probe_ranked, RankedInfo};
use crate::api::client::RiotApiClient;
use crate::api::transport::Transport;
use crate::display::output::{display_info, display_success};
use crate::error::AppError;
use crate::history::{fetch_match_ids, scan_matches, ScanReport};
use crate::identity::{resolve_identity, PlayerIdentity, RiotId};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub match_count: usize,
    pub match_type: Option<String>,
    pub top_n: usize,
    pub include_ranked: bool,
    pub show_progress: bool,
}

#[derive(Debug)]
pub struct Report {
    pub identity: PlayerIdentity,
    pub scan: ScanReport,
    pub top: Vec<ChampionStats>,
    /// `None` when ranked data was unavailable or not requested.
    pub ranked: Option<RankedInfo>,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb.set_message("Fetching match details");
    pb
}

/// Resolve, fetch, aggregate, rank, then probe ranked queues.
///
/// Returns `Ok(None)` when the player has no matches at all.
pub fn build_report<T: Transport>(
    client: &RiotApiClient<T>,
    riot_id: &RiotId,
    options: &ReportOptions,
) -> Result<Option<Report>, AppError> {
    display_info("Step 1: Resolving Riot ID to PUUID...");
    let identity = resolve_identity(client, riot_id)?;
    display_success(&format!("Found PUUID: {}", identity.puuid));

    display_info(&format!("Step 2: Fetching up to {} match IDs...", options.match_count));
    let match_ids = fetch_match_ids(
        client,
        &identity.puuid,
        options.match_count,
        options.match_type.as_deref(),
    )?;
    if match_ids.is_empty() {
        return Ok(None);
    }
    display_success(&format!("Found {} matches to analyze", match_ids.len()));

    display_info("Step 3: Fetching match details...");
    let pb = progress_bar(match_ids.len(), options.show_progress);
    let scan = scan_matches(client, &identity.puuid, &match_ids, &pb);
    pb.finish_with_message("✓ Match data fetched");
    info!(
        scanned = scan.scanned,
        skipped = scan.skipped.len(),
        plays = scan.tracker.total_plays(),
        "scan finished"
    );

    let top = scan.tracker.top(options.top_n);

    let ranked = if options.include_ranked {
        display_info("Step 4: Looking up ranked queues...");
        probe_ranked(client, &identity.puuid)
    } else {
        None
    };

    Ok(Some(Report {
        identity,
        scan,
        top,
        ranked,
    }))
}
