use crate::config::Config;
use crate::display::output::{display_warning, warning_line};
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use indicatif::ProgressBar;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::debug;

use super::endpoints::Endpoints;
use super::models::*;
use super::retry::send_with_retry;
use super::transport::{Transport, UreqTransport};

pub struct RiotApiClient<T: Transport = UreqTransport> {
    config: Config,
    endpoints: Endpoints,
    transport: T,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
    sleep: fn(Duration),
    /// Bar currently drawing on the terminal; notices go above it.
    progress: RefCell<Option<ProgressBar>>,
    #[cfg(test)]
    notices: RefCell<Vec<String>>,
}

impl RiotApiClient<UreqTransport> {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> RiotApiClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Result<Self, AppError> {
        config.validate()?;
        let endpoints = Endpoints::for_platform(&config.platform)?;
        let per_second = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            AppError::ConfigError("requests per second must be > 0".to_string())
        })?;

        Ok(RiotApiClient {
            config,
            endpoints,
            transport,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
            clock: DefaultClock::default(),
            sleep: thread::sleep,
            progress: RefCell::new(None),
            #[cfg(test)]
            notices: RefCell::new(Vec::new()),
        })
    }

    #[cfg(test)]
    pub fn with_sleeper(mut self, sleep: fn(Duration)) -> Self {
        self.sleep = sleep;
        self
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn set_progress(&self, pb: Option<ProgressBar>) {
        self.progress.replace(pb);
    }

    /// User-facing notice. Printed above the progress bar while one is drawing.
    pub fn notify(&self, message: &str) {
        #[cfg(test)]
        self.notices.borrow_mut().push(message.to_string());

        match self.progress.borrow().as_ref() {
            Some(pb) if !pb.is_hidden() => pb.println(warning_line(message)),
            _ => display_warning(message),
        }
    }

    /// Blocks until the limiter admits one more request.
    fn pace(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            (self.sleep)(not_until.wait_time_from(self.clock.now()));
        }
    }

    /// Paced, retried GET. Returns the body of a 200 response.
    fn execute_request(&self, url: &str, endpoint: &str, authenticated: bool) -> Result<String, AppError> {
        let api_key = authenticated.then_some(self.config.api_key.as_str());

        let resp = send_with_retry(&self.config.retry, |msg| self.notify(msg), self.sleep, || {
            self.pace();
            debug!(endpoint, url, "GET");
            self.transport.get(url, api_key)
        })?;

        debug!(endpoint, status = resp.status, "response");
        match resp.status {
            200 => Ok(resp.body),
            401 | 403 => Err(AppError::AuthError(resp.status)),
            status => Err(AppError::EndpointUnavailable {
                status,
                endpoint: endpoint.to_string(),
            }),
        }
    }

    fn get_json<D: DeserializeOwned>(&self, url: &str, endpoint: &str) -> Result<D, AppError> {
        let body = self.execute_request(url, endpoint, true)?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("{}: {}", endpoint, e)))
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, AppError> {
        let url = self.endpoints.account_by_riot_id(game_name, tag_line);

        self.get_json(&url, "account-v1").map_err(|e| match e {
            AppError::EndpointUnavailable { status: 404, .. } => {
                AppError::IdentityNotFound(format!("{}#{}", game_name, tag_line))
            }
            other => other,
        })
    }

    pub fn get_match_ids(
        &self,
        puuid: &str,
        start: usize,
        count: usize,
        match_type: Option<&str>,
    ) -> Result<Vec<String>, AppError> {
        let url = self
            .endpoints
            .match_ids_by_puuid(puuid, start, count, match_type);
        self.get_json(&url, "match-v5 ids")
    }

    pub fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = self.endpoints.match_by_id(match_id);
        self.get_json(&url, "match-v5")
    }

    pub fn get_summoner(&self, puuid: &str) -> Result<SummonerDto, AppError> {
        let url = self.endpoints.summoner_by_puuid(puuid);
        self.get_json(&url, "summoner-v4")
    }

    pub fn get_league_entries(&self, summoner_id: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = self.endpoints.league_entries_by_summoner(summoner_id);
        self.get_json(&url, "league-v4")
    }

    pub fn get_league_entries_by_puuid(&self, puuid: &str) -> Result<Vec<LeagueEntryDto>, AppError> {
        let url = self.endpoints.league_entries_by_puuid(puuid);
        self.get_json(&url, "league-v4")
    }

    /// Champion id to name from the latest Data Dragon release.
    /// Data Dragon is public, so the API key is not sent.
    pub fn get_champion_names(&self) -> Result<HashMap<i64, String>, AppError> {
        let body = self.execute_request(&self.endpoints.ddragon_versions(), "ddragon versions", false)?;
        let versions: Vec<String> =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;
        let latest = versions
            .first()
            .ok_or_else(|| AppError::MalformedResponse("empty Data Dragon version list".to_string()))?;

        let body = self.execute_request(
            &self.endpoints.ddragon_champions(latest),
            "ddragon champions",
            false,
        )?;
        let champions: DataDragonChampions =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;

        Ok(champions.names_by_id())
    }
}
