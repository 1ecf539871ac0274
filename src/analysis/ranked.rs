use crate::api::client::RiotApiClient;
use crate::api::models::LeagueEntryDto;
use crate::api::transport::Transport;
use crate::error::AppError;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct RankedInfo {
    /// Entries as returned by league-v4. Empty means the account is unranked.
    pub entries: Vec<LeagueEntryDto>,
}

/// Best-effort ranked lookup: summoner first, then league entries.
///
/// Returns `None` whenever any step fails (restricted key, region mismatch,
/// rate limit...). That is a normal outcome, not an error.
pub fn probe_ranked<T: Transport>(client: &RiotApiClient<T>, puuid: &str) -> Option<RankedInfo> {
    match lookup(client, puuid) {
        Ok(entries) => Some(RankedInfo { entries }),
        Err(e) => {
            warn!(error = %e, status = ?e.status(), "ranked lookup unavailable");
            None
        }
    }
}

fn lookup<T: Transport>(client: &RiotApiClient<T>, puuid: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
    let summoner = client.get_summoner(puuid)?;
    debug!(level = ?summoner.summoner_level, has_id = summoner.id.is_some(), "summoner");

    match summoner.id.as_deref().filter(|id| !id.is_empty()) {
        Some(summoner_id) => client.get_league_entries(summoner_id),
        // Summoner objects no longer always carry an encrypted id.
        None => client.get_league_entries_by_puuid(puuid),
    }
}
