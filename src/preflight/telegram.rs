//! Telegram reachability check.

use super::Probes;
use crate::config::PreflightEnv;
use crate::report::{Reporter, Severity};
use crate::{Error, Result};

/// Verify the bot token resolves to a registered bot. Hard gate: any
/// failure aborts the run.
pub async fn check(
    env: &PreflightEnv,
    probes: &impl Probes,
    reporter: &impl Reporter,
) -> Result<()> {
    let token = env
        .get("BOT_TOKEN")
        .ok_or_else(|| Error::other("BOT_TOKEN absent after configuration check"))?;

    match probes.bot_identity(token).await {
        Ok(identity) => {
            reporter.emit(
                Severity::Success,
                &format!("Telegram bot connected as @{}", identity.username),
            );
            Ok(())
        }
        Err(err) => {
            reporter.emit(Severity::Error, &format!("Telegram bot check failed: {}", err));
            Err(err)
        }
    }
}
