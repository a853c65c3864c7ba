//! Supabase REST client used for reachability probes.

use crate::{Error, Result};
use std::time::Duration;

/// Minimal Supabase client. Only issues bounded reads; no data from the
/// responses is interpreted beyond the presence or absence of an error.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl SupabaseClient {
    /// Create a new client with a per-request timeout.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Bounded read against a table: at most one row, result discarded.
    pub async fn probe_table(&self, table: &str) -> Result<()> {
        let url = format!("{}/rest/v1/{}?select=*&limit=1", self.base_url, table);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = resp.text().await.unwrap_or_default();
        let detail = detail.trim();
        if detail.is_empty() {
            Err(Error::DatabaseUnreachable(format!("{} on {}", status, table)))
        } else {
            Err(Error::DatabaseUnreachable(format!(
                "{} on {}: {}",
                status, table, detail
            )))
        }
    }
}

fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::TimeoutExceeded(err.to_string())
    } else {
        Error::DatabaseUnreachable(err.to_string())
    }
}
