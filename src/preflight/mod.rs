//! Preflight checks module.
//!
//! Sequential verification pipeline run before the bot starts serving
//! traffic: configuration completeness, Telegram reachability, Supabase
//! reachability and schema presence, then a network settings sanity check.
//! Stages run strictly in order; a fatal failure aborts the run.

mod config;
mod network;
mod supabase;
mod telegram;

use crate::config::PreflightEnv;
use crate::report::{Reporter, Severity};
use crate::services::supabase::SupabaseClient;
use crate::services::telegram::{BotIdentity, TelegramClient};
use crate::Result;
use std::time::Duration;

/// Default per-request timeout for remote checks, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Collection probed first, to tell "database down" from "table missing".
pub const BASELINE_COLLECTION: &str = "users";

/// Collections the schema is expected to expose. Probed individually; a
/// failed probe is reported for that collection only and never aborts the
/// run or skips the remaining probes.
pub const EXPECTED_COLLECTIONS: [&str; 5] =
    ["orders", "payments", "products", "broadcasts", "settings"];

/// Remote calls the checker performs.
///
/// Abstracted so tests can script outcomes and count invocations instead of
/// standing up real endpoints.
#[allow(async_fn_in_trait)]
pub trait Probes {
    /// Resolve the bot's registered identity from its token.
    async fn bot_identity(&self, token: &str) -> Result<BotIdentity>;

    /// Bounded read (limit one) against a named collection.
    async fn probe_collection(&self, url: &str, key: &str, collection: &str) -> Result<()>;
}

/// Probes backed by real HTTP clients.
pub struct HttpProbes {
    timeout: Duration,
}

impl HttpProbes {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Probes for HttpProbes {
    async fn bot_identity(&self, token: &str) -> Result<BotIdentity> {
        TelegramClient::new(token, self.timeout)?.get_me().await
    }

    async fn probe_collection(&self, url: &str, key: &str, collection: &str) -> Result<()> {
        SupabaseClient::new(url, key, self.timeout)?
            .probe_table(collection)
            .await
    }
}

/// Run every preflight stage in order.
///
/// Returns `Ok(())` when all mandatory checks pass. Fatal failures are
/// returned as errors; only the caller decides what to do with the process.
pub async fn run_preflight(
    env: &PreflightEnv,
    probes: &impl Probes,
    reporter: &impl Reporter,
) -> Result<()> {
    config::check_required(env, reporter)?;
    config::check_optional(env, reporter);
    telegram::check(env, probes, reporter).await?;
    supabase::check(env, probes, reporter).await?;
    network::check(env, reporter);

    reporter.emit(Severity::Success, "All preflight checks passed");
    Ok(())
}
