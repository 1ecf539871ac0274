use crate::api::endpoints::regional_routing;
use crate::api::retry::RetryPolicy;
use crate::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const API_KEY_VAR: &str = "RIOT_API_KEY";
pub const DEFAULT_PLATFORM: &str = "tr1";
pub const DEFAULT_MATCH_COUNT: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub platform: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub requests_per_second: u32,
}

impl Config {
    /// Loads `.env`, then builds the config from the process environment.
    /// `platform` (from `--region`) wins over `RIOT_REGION`.
    /// `prompt_key` is only called when no API key is set.
    pub fn from_env<P>(platform: Option<&str>, prompt_key: P) -> Result<Self, AppError>
    where
        P: FnOnce() -> Result<String, AppError>,
    {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok(), platform, prompt_key)
    }

    pub fn from_lookup<L, P>(lookup: L, platform: Option<&str>, prompt_key: P) -> Result<Self, AppError>
    where
        L: Fn(&str) -> Option<String>,
        P: FnOnce() -> Result<String, AppError>,
    {
        let api_key = resolve_api_key(lookup(API_KEY_VAR), prompt_key)?;

        let platform = platform
            .map(str::to_string)
            .or_else(|| lookup("RIOT_REGION"))
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());

        let timeout_secs: u64 = parse_var(&lookup, "RIOT_TIMEOUT_SECS", 10)?;
        let max_attempts: u32 = parse_var(&lookup, "RIOT_MAX_RETRIES", 3)?;
        let requests_per_second: u32 = parse_var(&lookup, "RIOT_REQUESTS_PER_SECOND", 8)?;

        let config = Config {
            api_key,
            platform,
            timeout: Duration::from_secs(timeout_secs),
            retry: RetryPolicy {
                max_attempts,
                ..RetryPolicy::default()
            },
            requests_per_second,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if regional_routing(&self.platform).is_none() {
            return Err(AppError::ConfigError(format!(
                "unknown platform '{}' (expected e.g. tr1, euw1, na1, kr)",
                self.platform
            )));
        }
        if self.timeout.is_zero() {
            return Err(AppError::ConfigError("RIOT_TIMEOUT_SECS must be > 0".to_string()));
        }
        if self.retry.max_attempts == 0 {
            return Err(AppError::ConfigError("RIOT_MAX_RETRIES must be > 0".to_string()));
        }
        if self.requests_per_second == 0 {
            return Err(AppError::ConfigError(
                "RIOT_REQUESTS_PER_SECOND must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Environment first, prompt second. Blank values count as missing.
pub fn resolve_api_key<P>(from_env: Option<String>, prompt: P) -> Result<String, AppError>
where
    P: FnOnce() -> Result<String, AppError>,
{
    let key = match from_env.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
        Some(key) => key,
        None => prompt()?.trim().to_string(),
    };

    if key.is_empty() {
        Err(AppError::MissingCredential)
    } else {
        Ok(key)
    }
}

fn parse_var<L, T>(lookup: &L, name: &str, default: T) -> Result<T, AppError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} is not a valid number: '{}'", name, raw))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            api_key: "RGAPI-test".to_string(),
            platform: "tr1".to_string(),
            timeout: Duration::from_secs(1),
            retry: RetryPolicy {
                base_delay: Duration::ZERO,
                ..RetryPolicy::default()
            },
            requests_per_second: 10_000,
        }
    }
}
