use crate::api::models::{MatchDto, ParticipantDto};
use crate::error::AppError;

/// The tracked player's result in one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub champion: String,
    pub won: bool,
}

#[derive(Debug)]
pub enum SummaryError {
    /// The player is not among the participants.
    PlayerAbsent,
    Malformed(AppError),
}

fn malformed(reason: &str) -> SummaryError {
    SummaryError::Malformed(AppError::MalformedResponse(reason.to_string()))
}

/// Extracts the player's champion and result.
///
/// The champion name comes from `championName`, then from `champion_for_id`
/// with `championId`, and is `Unknown` when the payload carries neither.
pub fn summarize_match<F>(
    dto: &MatchDto,
    puuid: &str,
    champion_for_id: F,
) -> Result<MatchSummary, SummaryError>
where
    F: FnOnce(i64) -> String,
{
    let info = dto.info.as_ref().ok_or_else(|| malformed("missing info"))?;

    let mut entries = info
        .participants
        .iter()
        .filter(|p| p.puuid.as_deref() == Some(puuid));

    let player: &ParticipantDto = entries.next().ok_or(SummaryError::PlayerAbsent)?;
    if entries.next().is_some() {
        return Err(malformed("player listed more than once"));
    }

    let won = player.win.ok_or_else(|| malformed("participant has no win flag"))?;

    let champion = match (player.champion_name.as_deref(), player.champion_id) {
        (Some(name), _) if !name.trim().is_empty() => name.to_string(),
        (_, Some(id)) => champion_for_id(id),
        _ => "Unknown".to_string(),
    };

    Ok(MatchSummary { champion, won })
}
