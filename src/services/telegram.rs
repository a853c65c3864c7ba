//! Telegram Bot API client.

use crate::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Telegram Bot API client, scoped to a single bot token.
pub struct TelegramClient {
    token: String,
    client: reqwest::Client,
}

/// Envelope every Bot API response is wrapped in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

/// Identity returned by the getMe call.
#[derive(Debug, Clone, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    pub username: String,
    pub first_name: Option<String>,
}

impl TelegramClient {
    /// Create a new client with a per-request timeout.
    pub fn new(token: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            token: token.to_string(),
            client,
        })
    }

    /// Call getMe to confirm the token resolves to a registered bot.
    pub async fn get_me(&self) -> Result<BotIdentity> {
        let url = format!("{}/bot{}/getMe", TELEGRAM_BASE_URL, self.token);
        tracing::debug!("GET {}/bot<token>/getMe", TELEGRAM_BASE_URL);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = resp.status();
        let body: ApiResponse<BotIdentity> = match resp.json().await {
            Ok(body) => body,
            Err(_) => return Err(Error::BotUnreachable(format!("HTTP {}", status))),
        };

        if !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(Error::BotUnreachable(description));
        }

        body.result
            .ok_or_else(|| Error::BotUnreachable("getMe returned no result".to_string()))
    }
}

fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::TimeoutExceeded(err.to_string())
    } else {
        Error::BotUnreachable(err.to_string())
    }
}
