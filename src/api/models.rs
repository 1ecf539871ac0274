use serde::Deserialize;
use std::collections::HashMap;

// Account V1 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

// Summoner V4 response. Newer API versions no longer return `id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub summoner_level: Option<i64>,
}

// League V4 response
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl LeagueEntryDto {
    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            0.0
        } else {
            self.wins as f64 / games as f64 * 100.0
        }
    }
}

// Match V5 response. Everything is optional so that a partial payload can be
// reported as malformed instead of failing deserialization wholesale.
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    #[serde(default)]
    pub info: Option<MatchInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub champion_id: Option<i64>,
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub win: Option<bool>,
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub key: String,
    pub name: String,
}

impl DataDragonChampions {
    /// Numeric champion id (the `key` field) to display name.
    pub fn names_by_id(&self) -> HashMap<i64, String> {
        self.data
            .values()
            .filter_map(|info| info.key.parse::<i64>().ok().map(|id| (id, info.name.clone())))
            .collect()
    }
}
