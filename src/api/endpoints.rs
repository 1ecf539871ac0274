// URL builders for the Riot and Data Dragon endpoints used by the client.

use crate::error::AppError;

pub const DATA_DRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";

/// Largest `count` match-v5 accepts for one id page.
pub const MATCH_IDS_PAGE_SIZE: usize = 100;

/// Maps a platform (shard) to the regional cluster serving account-v1 and match-v5.
pub fn regional_routing(platform: &str) -> Option<&'static str> {
    match platform {
        "na1" | "br1" | "la1" | "la2" => Some("americas"),
        "euw1" | "eun1" | "tr1" | "ru" | "me1" => Some("europe"),
        "kr" | "jp1" => Some("asia"),
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => Some("sea"),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    platform_base: String,
    regional_base: String,
    ddragon_base: String,
}

impl Endpoints {
    pub fn for_platform(platform: &str) -> Result<Self, AppError> {
        let region = regional_routing(platform).ok_or_else(|| {
            AppError::ConfigError(format!("unknown platform '{}'", platform))
        })?;

        Ok(Endpoints {
            platform_base: format!("https://{}.api.riotgames.com", platform),
            regional_base: format!("https://{}.api.riotgames.com", region),
            ddragon_base: DATA_DRAGON_BASE.to_string(),
        })
    }

    pub fn account_by_riot_id(&self, game_name: &str, tag_line: &str) -> String {
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.regional_base,
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        )
    }

    pub fn match_ids_by_puuid(
        &self,
        puuid: &str,
        start: usize,
        count: usize,
        match_type: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start={}&count={}",
            self.regional_base, puuid, start, count
        );
        if let Some(kind) = match_type {
            url.push_str("&type=");
            url.push_str(&urlencoding::encode(kind));
        }
        url
    }

    pub fn match_by_id(&self, match_id: &str) -> String {
        format!(
            "{}/lol/match/v5/matches/{}",
            self.regional_base,
            urlencoding::encode(match_id)
        )
    }

    pub fn summoner_by_puuid(&self, puuid: &str) -> String {
        format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_base, puuid
        )
    }

    pub fn league_entries_by_summoner(&self, summoner_id: &str) -> String {
        format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_base, summoner_id
        )
    }

    pub fn league_entries_by_puuid(&self, puuid: &str) -> String {
        format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_base, puuid
        )
    }

    pub fn ddragon_versions(&self) -> String {
        format!("{}/api/versions.json", self.ddragon_base)
    }

    pub fn ddragon_champions(&self, version: &str) -> String {
        format!(
            "{}/cdn/{}/data/en_US/champion.json",
            self.ddragon_base, version
        )
    }
}
