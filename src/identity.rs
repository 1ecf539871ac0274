use crate::api::client::RiotApiClient;
use crate::api::transport::Transport;
use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Player-facing `gameName#tagLine`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (game_name, tag_line) = s.trim().split_once('#').ok_or(AppError::InvalidRiotId)?;
        let game_name = game_name.trim();
        let tag_line = tag_line.trim();

        if game_name.is_empty() || tag_line.is_empty() {
            return Err(AppError::InvalidRiotId);
        }

        Ok(RiotId {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: String,
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Resolves a Riot ID to its PUUID. Not-found, auth and exhausted rate-limit
/// failures are returned to the caller, which treats them as fatal.
pub fn resolve_identity<T: Transport>(
    client: &RiotApiClient<T>,
    riot_id: &RiotId,
) -> Result<PlayerIdentity, AppError> {
    let account = client.get_account(&riot_id.game_name, &riot_id.tag_line)?;

    if account.puuid.trim().is_empty() {
        return Err(AppError::MalformedResponse(
            "account-v1 returned no puuid".to_string(),
        ));
    }

    Ok(PlayerIdentity {
        game_name: account
            .game_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| riot_id.game_name.clone()),
        tag_line: account
            .tag_line
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| riot_id.tag_line.clone()),
        puuid: account.puuid,
    })
}
