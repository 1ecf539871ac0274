use crate::error::AppError;
use std::time::Duration;

const USER_AGENT: &str = concat!("top_champs/", env!("CARGO_PKG_VERSION"));

/// Raw HTTP response, before any status interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub retry_after: Option<Duration>,
    pub body: String,
}

/// Blocking GET seam between the Riot client and the network.
pub trait Transport {
    /// Sends a GET request. Non-2xx statuses are returned as responses;
    /// only transport failures (DNS, connect, timeout) are errors.
    fn get(&self, url: &str, api_key: Option<&str>) -> Result<HttpResponse, AppError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        UreqTransport { agent }
    }

    fn read(resp: ureq::Response) -> Result<HttpResponse, AppError> {
        let status = resp.status();
        let retry_after = resp.header("Retry-After").and_then(parse_retry_after);
        let body = resp
            .into_string()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, api_key: Option<&str>) -> Result<HttpResponse, AppError> {
        let mut request = self.agent.get(url);
        if let Some(key) = api_key {
            request = request.set("X-Riot-Token", key);
        }

        match request.call() {
            Ok(resp) => Self::read(resp),
            Err(ureq::Error::Status(_, resp)) => Self::read(resp),
            Err(ureq::Error::Transport(e)) => Err(AppError::HttpError(e.to_string())),
        }
    }
}

/// Riot sends `Retry-After` as whole seconds. HTTP-date values are ignored.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
