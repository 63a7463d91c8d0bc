pub mod transport;

use crate::models::{PlayReward, StreakInfo, TaskRecord, UserProfile};
use core_logic::{ApiError, TaskOutcome};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use std::sync::Arc;

pub use transport::{ApiResponse, ApiTransport, HttpTransport, Method};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "id-ID,id;q=0.9,fr-FR;q=0.8,fr;q=0.7,en-US;q=0.6,en;q=0.5";
const SEC_CH_UA: &str = r#""Not/A)Brand";v="99", "Google Chrome";v="115", "Chromium";v="115""#;

/// Fixed browser-fingerprint header set, optionally with a bearer credential.
pub fn common_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let pairs: &[(&str, &str)] = &[
        ("Accept", "application/json, text/plain, */*"),
        ("Accept-Language", ACCEPT_LANGUAGE),
        ("Origin", "https://prod-tg-app.midas.app"),
        ("Referer", "https://prod-tg-app.midas.app/"),
        ("Sec-Ch-Ua", SEC_CH_UA),
        ("Sec-Ch-Ua-Mobile", "?0"),
        ("Sec-Ch-Ua-Platform", "\"Windows\""),
        ("User-Agent", USER_AGENT),
    ];

    for (name, value) in pairs {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            headers.insert(name, value);
        }
    }

    if let Some(token) = token {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
            headers.insert(AUTHORIZATION, value);
        }
    }

    headers
}

fn json_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = common_headers(token);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Outcome of the daily streak call.
#[derive(Debug, Clone)]
pub enum StreakStatus {
    /// 200: a new streak day was recorded.
    Claimed(StreakInfo),
    /// 400 with the dedicated message: already checked in today. Not an error.
    AlreadyClaimed,
    /// Any other response the server sent back.
    Unexpected { status: u16, message: String },
}

/// Thin request/response mappers over the remote API, one method per
/// endpoint. Each method issues exactly one request through the transport.
pub struct MidasClient {
    transport: Arc<dyn ApiTransport>,
    base_url: String,
}

impl MidasClient {
    pub fn new(transport: Arc<dyn ApiTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /auth/register. 201 returns the bearer credential as raw text.
    pub async fn register(&self, init_data: &str) -> Result<String, ApiError> {
        let url = self.url("/auth/register");
        let body = json!({ "initData": init_data });
        let response = self
            .transport
            .execute(Method::Post, &url, json_headers(None), Some(body))
            .await?;

        if response.status == 201 {
            Ok(response.body.trim().to_string())
        } else {
            Err(ApiError::Http {
                status: response.status,
                endpoint: url,
            })
        }
    }

    /// GET /user - the profile carrying points and the ticket count.
    pub async fn get_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.url("/user");
        let response = self
            .transport
            .execute(Method::Get, &url, common_headers(Some(token)), None)
            .await?;

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                endpoint: url,
            });
        }

        serde_json::from_str(&response.body).map_err(|_| ApiError::Decode {
            endpoint: url,
            body: response.body,
        })
    }

    /// POST /streak - daily check-in. The 400 "Can't claim streak now"
    /// response is a domain branch, not a failure.
    pub async fn update_streak(&self, token: &str) -> Result<StreakStatus, ApiError> {
        let url = self.url("/streak");
        let response = self
            .transport
            .execute(Method::Post, &url, common_headers(Some(token)), None)
            .await?;

        let info: StreakInfo =
            serde_json::from_str(&response.body).map_err(|_| ApiError::Decode {
                endpoint: url,
                body: response.body.clone(),
            })?;

        if response.status == 200 {
            return Ok(StreakStatus::Claimed(info));
        }

        if response.status == 400 && info.message.as_deref() == Some("Can't claim streak now") {
            return Ok(StreakStatus::AlreadyClaimed);
        }

        Ok(StreakStatus::Unexpected {
            status: response.status,
            message: info.message.unwrap_or_else(|| "Unknown error".to_string()),
        })
    }

    /// POST /game/play - consumes one ticket, returns points earned.
    pub async fn play(&self, token: &str) -> Result<PlayReward, ApiError> {
        let url = self.url("/game/play");
        let response = self
            .transport
            .execute(Method::Post, &url, json_headers(Some(token)), None)
            .await?;

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                endpoint: url,
            });
        }

        serde_json::from_str(&response.body).map_err(|_| ApiError::Decode {
            endpoint: url,
            body: response.body,
        })
    }

    /// GET /tasks/available - drops already-completed tasks and projects the
    /// rest down to id / name / claim marker / wait time.
    pub async fn available_tasks(&self, token: &str) -> Result<Vec<TaskRecord>, ApiError> {
        let url = self.url("/tasks/available");
        let response = self
            .transport
            .execute(Method::Get, &url, common_headers(Some(token)), None)
            .await?;

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                endpoint: url,
            });
        }

        let tasks: Vec<TaskRecord> =
            serde_json::from_str(&response.body).map_err(|_| ApiError::Decode {
                endpoint: url,
                body: response.body,
            })?;

        Ok(tasks
            .iter()
            .filter(|task| !task.is_complete())
            .map(TaskRecord::projected)
            .collect())
    }

    /// POST /tasks/start/{id}. Success is a 2xx status.
    pub async fn start_task(&self, token: &str, task_id: &str) -> TaskOutcome {
        let url = self.url(&format!("/tasks/start/{}", task_id));
        self.simple_call(Method::Post, &url, token).await
    }

    /// POST /tasks/claim/{id}. Success is a 2xx status; the reward body is
    /// reported as the outcome message.
    pub async fn claim_task(&self, token: &str, task_id: &str) -> TaskOutcome {
        let url = self.url(&format!("/tasks/claim/{}", task_id));
        match self
            .transport
            .execute(Method::Post, &url, common_headers(Some(token)), None)
            .await
        {
            Ok(response) if response.is_success() => {
                let mut outcome = TaskOutcome::ok();
                // Reward payload is informational only; a non-JSON body is
                // still a successful claim.
                if serde_json::from_str::<serde_json::Value>(&response.body).is_ok() {
                    outcome.message = Some(response.body);
                }
                outcome
            }
            Ok(response) => TaskOutcome::failed(format!("HTTP Error: {}", response.status)),
            Err(e) => TaskOutcome::failed(e.to_string()),
        }
    }

    /// PATCH /user/visited. Success is a 2xx status.
    pub async fn mark_visited(&self, token: &str) -> TaskOutcome {
        let url = self.url("/user/visited");
        self.simple_call(Method::Patch, &url, token).await
    }

    async fn simple_call(&self, method: Method, url: &str, token: &str) -> TaskOutcome {
        match self
            .transport
            .execute(method, url, common_headers(Some(token)), None)
            .await
        {
            Ok(response) if response.is_success() => TaskOutcome::ok(),
            Ok(response) => TaskOutcome::failed(format!("HTTP Error: {}", response.status)),
            Err(e) => TaskOutcome::failed(e.to_string()),
        }
    }
}
