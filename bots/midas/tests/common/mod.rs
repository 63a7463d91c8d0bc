#![allow(dead_code)]

use async_trait::async_trait;
use core_logic::{Account, AccountSource, ApiError, Clock};
use midas_bot::client::{ApiResponse, ApiTransport, Method};
use reqwest::header::HeaderMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE_URL: &str = "https://unit.test/api";

/// Shared chronological record of transport calls and clock sleeps, so
/// ordering properties (wait happens before claim) are checkable.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

struct Rule {
    method: Method,
    path_prefix: String,
    status: u16,
    body: String,
}

/// Scripted transport: responds per registered rule, records every call.
/// Unmatched requests get a 404 so an unexpected call fails loudly in
/// assertions rather than hanging.
pub struct MockTransport {
    rules: Mutex<Vec<Rule>>,
    pub events: EventLog,
}

impl MockTransport {
    pub fn new(events: EventLog) -> Self {
        Self {
            rules: Mutex::new(Vec::new()),
            events,
        }
    }

    pub fn on(&self, method: Method, path_prefix: &str, status: u16, body: &str) {
        self.rules.lock().unwrap().push(Rule {
            method,
            path_prefix: path_prefix.to_string(),
            status,
            body: body.to_string(),
        });
    }

    pub fn calls(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.starts_with("call "))
            .cloned()
            .collect()
    }

    pub fn calls_to(&self, path_prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.contains(path_prefix))
            .count()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        _headers: HeaderMap,
        _body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let path = url.strip_prefix(BASE_URL).unwrap_or(url).to_string();
        self.events
            .lock()
            .unwrap()
            .push(format!("call {:?} {}", method, path));

        let rules = self.rules.lock().unwrap();
        for rule in rules.iter() {
            if rule.method == method && path.starts_with(&rule.path_prefix) {
                return Ok(ApiResponse {
                    status: rule.status,
                    body: rule.body.clone(),
                });
            }
        }

        Ok(ApiResponse {
            status: 404,
            body: "{}".to_string(),
        })
    }
}

/// Clock that records sleeps into the shared log instead of waiting.
pub struct RecordingClock {
    pub events: EventLog,
}

#[async_trait]
impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.events
            .lock()
            .unwrap()
            .push(format!("sleep {}s", duration.as_secs()));
    }
}

/// In-memory account list for worker tests.
pub struct StaticAccounts(pub Vec<Account>);

impl AccountSource for StaticAccounts {
    fn load_accounts(&self) -> anyhow::Result<Vec<Account>> {
        Ok(self.0.clone())
    }
}
