use crate::analysis::champion_stats::ChampionStatsTracker;
use crate::analysis::match_summary::{summarize_match, SummaryError};
use crate::api::client::RiotApiClient;
use crate::api::endpoints::MATCH_IDS_PAGE_SIZE;
use crate::api::transport::Transport;
use crate::error::AppError;
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Fetches up to `count` match ids, newest first, paging as needed.
pub fn fetch_match_ids<T: Transport>(
    client: &RiotApiClient<T>,
    puuid: &str,
    count: usize,
    match_type: Option<&str>,
) -> Result<Vec<String>, AppError> {
    let mut ids = Vec::new();

    while ids.len() < count {
        let page_size = (count - ids.len()).min(MATCH_IDS_PAGE_SIZE);
        let page = client.get_match_ids(puuid, ids.len(), page_size, match_type)?;
        let fetched = page.len();
        debug!(start = ids.len(), page_size, fetched, "match id page");

        ids.extend(page);
        if fetched < page_size {
            break;
        }
    }

    Ok(ids)
}

#[derive(Debug)]
pub enum SkipReason {
    Fetch(AppError),
    PlayerAbsent,
    Malformed(AppError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Fetch(e) => write!(f, "could not fetch ({})", e),
            SkipReason::PlayerAbsent => write!(f, "player not found in participants"),
            SkipReason::Malformed(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug)]
pub struct SkippedMatch {
    pub match_id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub tracker: ChampionStatsTracker,
    pub scanned: usize,
    pub skipped: Vec<SkippedMatch>,
}

/// Champion id to name, loaded from Data Dragon on first use only.
#[derive(Default)]
struct ChampionDirectory {
    names: Option<HashMap<i64, String>>,
}

impl ChampionDirectory {
    fn name_for<T: Transport>(&mut self, client: &RiotApiClient<T>, id: i64) -> String {
        let names = self.names.get_or_insert_with(|| {
            client.get_champion_names().unwrap_or_else(|e| {
                warn!(error = %e, "Data Dragon unavailable");
                client.notify(&format!(
                    "Could not load champion names from Data Dragon: {}",
                    e
                ));
                HashMap::new()
            })
        });

        names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("ID_{}", id))
    }
}

/// Fetches every match in order and tallies the player's champions.
///
/// A match that cannot be fetched or read is recorded in
/// [`ScanReport::skipped`]; the scan always runs to the end of `match_ids`.
/// Client notices are printed above `pb` while the scan runs.
pub fn scan_matches<T: Transport>(
    client: &RiotApiClient<T>,
    puuid: &str,
    match_ids: &[String],
    pb: &ProgressBar,
) -> ScanReport {
    let mut report = ScanReport::default();
    let mut directory = ChampionDirectory::default();
    client.set_progress(Some(pb.clone()));

    for match_id in match_ids {
        let outcome = client
            .get_match(match_id)
            .map_err(SkipReason::Fetch)
            .and_then(|dto| {
                summarize_match(&dto, puuid, |id| directory.name_for(client, id)).map_err(
                    |e| match e {
                        SummaryError::PlayerAbsent => SkipReason::PlayerAbsent,
                        SummaryError::Malformed(e) => SkipReason::Malformed(e),
                    },
                )
            });

        match outcome {
            Ok(summary) => {
                debug!(match_id = %match_id, champion = %summary.champion, won = summary.won, "scanned");
                report.tracker.add_game(&summary.champion, summary.won);
                report.scanned += 1;
            }
            Err(reason) => {
                warn!(match_id = %match_id, %reason, "skipping match");
                report.skipped.push(SkippedMatch {
                    match_id: match_id.clone(),
                    reason,
                });
            }
        }

        pb.inc(1);
    }

    client.set_progress(None);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json, status, test_client, FakeTransport};
    use pretty_assertions::assert_eq;

    fn participant_match(puuid: &str, champion: &str, win: bool) -> String {
        format!(
            r#"{{"info":{{"participants":[
                {{"puuid":"someone-else","championName":"Teemo","win":{}}},
                {{"puuid":"{}","championName":"{}","win":{}}}
            ]}}}}"#,
            !win, puuid, champion, win
        )
    }

    fn ids(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("TR1_{}", i)).collect()
    }

    fn id_list(ids: &[String]) -> String {
        serde_json::to_string(ids).unwrap()
    }

    #[test]
    fn three_matches_aggregate_by_champion() {
        let client = test_client(
            FakeTransport::new()
                .on("matches/TR1_1", json(&participant_match("me", "Jinx", true)))
                .on("matches/TR1_2", json(&participant_match("me", "Jinx", true)))
                .on("matches/TR1_3", json(&participant_match("me", "Yasuo", false))),
        );

        let report = scan_matches(&client, "me", &ids(3), &ProgressBar::hidden());

        assert_eq!(report.scanned, 3);
        assert!(report.skipped.is_empty());
        let top = report.tracker.top(10);
        assert_eq!(top.len(), 2);
        assert_eq!((top[0].name.as_str(), top[0].plays, top[0].wins), ("Jinx", 2, 2));
        assert_eq!((top[1].name.as_str(), top[1].plays, top[1].wins), ("Yasuo", 1, 0));
    }

    #[test]
    fn failed_match_is_skipped_and_scan_continues() {
        let mut transport = FakeTransport::new();
        for id in ids(100) {
            let body = if id == "TR1_47" {
                status(500)
            } else {
                json(&participant_match("me", "Lux", true))
            };
            transport = transport.on(&format!("matches/{}", id), body);
        }
        let client = test_client(transport);

        let report = scan_matches(&client, "me", &ids(100), &ProgressBar::hidden());

        assert_eq!(report.scanned, 99);
        assert_eq!(report.tracker.total_plays(), 99);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].match_id, "TR1_47");
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Fetch(AppError::EndpointUnavailable { status: 500, .. })
        ));
    }

    #[test]
    fn exhausted_rate_limit_skips_only_that_match() {
        let client = test_client(
            FakeTransport::new()
                .on("matches/TR1_1", status(429))
                .on("matches/TR1_2", json(&participant_match("me", "Ahri", false))),
        );

        let report = scan_matches(&client, "me", &ids(2), &ProgressBar::hidden());

        assert_eq!(report.scanned, 1);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Fetch(AppError::RateLimited)
        ));
    }

    #[test]
    fn matches_without_player_or_with_bad_payload_are_skipped() {
        let client = test_client(
            FakeTransport::new()
                .on("matches/TR1_1", json(&participant_match("not-me", "Zed", true)))
                .on("matches/TR1_2", json(r#"{"info":null}"#))
                .on("matches/TR1_3", json(&participant_match("me", "Zed", true))),
        );

        let report = scan_matches(&client, "me", &ids(3), &ProgressBar::hidden());

        assert_eq!(report.scanned, 1);
        assert!(matches!(report.skipped[0].reason, SkipReason::PlayerAbsent));
        assert!(matches!(report.skipped[1].reason, SkipReason::Malformed(_)));
    }

    #[test]
    fn data_dragon_is_loaded_once_and_only_when_needed() {
        let no_name = r#"{"info":{"participants":[{"puuid":"me","championId":222,"win":true}]}}"#;
        let client = test_client(
            FakeTransport::new()
                .on("matches/TR1_1", json(no_name))
                .on("matches/TR1_2", json(no_name))
                .on("matches/TR1_3", json(&participant_match("me", "Jinx", false)))
                .on("api/versions.json", json(r#"["15.1.1"]"#))
                .on(
                    "champion.json",
                    json(r#"{"data":{"Jinx":{"key":"222","name":"Jinx"}}}"#),
                ),
        );

        let report = scan_matches(&client, "me", &ids(3), &ProgressBar::hidden());

        let jinx = &report.tracker.top(1)[0];
        assert_eq!((jinx.name.as_str(), jinx.plays, jinx.wins), ("Jinx", 3, 2));
        assert_eq!(client.transport().urls_containing("versions.json"), 1);
    }

    #[test]
    fn unreachable_data_dragon_falls_back_to_id_label() {
        let client = test_client(FakeTransport::new().on(
            "matches/TR1_1",
            json(r#"{"info":{"participants":[{"puuid":"me","championId":999,"win":false}]}}"#),
        ));

        let report = scan_matches(&client, "me", &ids(1), &ProgressBar::hidden());
        assert_eq!(report.tracker.top(1)[0].name, "ID_999");
        assert_eq!(client.notices().len(), 1);
        assert!(client.notices()[0].starts_with("Could not load champion names"));
    }

    #[test]
    fn skipped_matches_are_only_recorded_not_announced() {
        let client = test_client(
            FakeTransport::new()
                .on("matches/TR1_1", status(500))
                .on("matches/TR1_2", json(&participant_match("not-me", "Zed", true))),
        );

        let report = scan_matches(&client, "me", &ids(2), &ProgressBar::hidden());

        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.match_id.as_str()).collect();
        assert_eq!(skipped, vec!["TR1_1", "TR1_2"]);
        assert!(client.notices().is_empty());
    }

    #[test]
    fn match_ids_are_paged_in_hundreds() {
        let all = ids(250);
        let client = test_client(
            FakeTransport::new()
                .on("ids?start=0&count=100", json(&id_list(&all[..100])))
                .on("ids?start=100&count=100", json(&id_list(&all[100..200])))
                .on("ids?start=200&count=50", json(&id_list(&all[200..]))),
        );

        let fetched = fetch_match_ids(&client, "me", 250, None).unwrap();
        assert_eq!(fetched, all);
        assert_eq!(client.transport().urls_containing("/ids?"), 3);
    }

    #[test]
    fn short_page_ends_paging() {
        let all = ids(30);
        let client = test_client(
            FakeTransport::new().on("ids?start=0&count=100", json(&id_list(&all))),
        );

        let fetched = fetch_match_ids(&client, "me", 150, Some("ranked")).unwrap();
        assert_eq!(fetched.len(), 30);
        assert_eq!(client.transport().urls_containing("/ids?"), 1);
        assert!(client.transport().calls()[0].0.ends_with("&type=ranked"));
    }

    #[test]
    fn match_id_failure_is_fatal() {
        let client = test_client(FakeTransport::new().on("/ids?", status(403)));
        assert!(matches!(
            fetch_match_ids(&client, "me", 20, None),
            Err(AppError::AuthError(403))
        ));
    }
}
