// Scripted in-memory transport for client and pipeline tests.

use crate::config::Config;
use crate::error::AppError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use super::client::RiotApiClient;
use super::transport::{HttpResponse, Transport};

pub fn json(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        retry_after: None,
        body: body.to_string(),
    }
}

pub fn status(code: u16) -> HttpResponse {
    HttpResponse {
        status: code,
        retry_after: None,
        body: format!(r#"{{"status":{{"status_code":{}}}}}"#, code),
    }
}

struct Route {
    needle: String,
    responses: VecDeque<HttpResponse>,
}

/// Answers each request from the route whose needle is the longest substring
/// of the URL. A route replays its last response once its script runs out.
/// Unrouted URLs get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<Vec<Route>>,
    calls: RefCell<Vec<(String, Option<String>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, needle: &str, response: HttpResponse) -> Self {
        self.on_sequence(needle, vec![response])
    }

    pub fn on_sequence(self, needle: &str, responses: Vec<HttpResponse>) -> Self {
        self.routes.borrow_mut().push(Route {
            needle: needle.to_string(),
            responses: responses.into(),
        });
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.borrow().clone()
    }

    pub fn urls_containing(&self, needle: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(url, _)| url.contains(needle))
            .count()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, api_key: Option<&str>) -> Result<HttpResponse, AppError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), api_key.map(str::to_string)));

        let mut routes = self.routes.borrow_mut();
        let route = routes
            .iter_mut()
            .filter(|route| url.contains(&route.needle))
            .max_by_key(|route| route.needle.len());

        let Some(route) = route else {
            return Ok(status(404));
        };

        let response = if route.responses.len() > 1 {
            route.responses.pop_front()
        } else {
            route.responses.front().cloned()
        };
        Ok(response.unwrap_or_else(|| status(404)))
    }
}

fn no_sleep(_: Duration) {}

pub fn test_client(transport: FakeTransport) -> RiotApiClient<FakeTransport> {
    RiotApiClient::with_transport(Config::for_tests(), transport)
        .expect("test config is valid")
        .with_sleeper(no_sleep)
}
