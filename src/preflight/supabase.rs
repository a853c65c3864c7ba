//! Supabase reachability and schema-presence checks.

use super::{Probes, BASELINE_COLLECTION, EXPECTED_COLLECTIONS};
use crate::config::PreflightEnv;
use crate::report::{Reporter, Severity};
use crate::{Error, Result};

/// Verify the database is reachable, then probe each expected collection.
///
/// The baseline read is a hard gate. Per-collection probes are diagnostic:
/// a failure is reported for that collection only and the remaining probes
/// still run.
pub async fn check(
    env: &PreflightEnv,
    probes: &impl Probes,
    reporter: &impl Reporter,
) -> Result<()> {
    let url = env
        .get("SUPABASE_URL")
        .ok_or_else(|| Error::other("SUPABASE_URL absent after configuration check"))?;
    let key = env
        .get("SUPABASE_KEY")
        .ok_or_else(|| Error::other("SUPABASE_KEY absent after configuration check"))?;

    if let Err(err) = probes.probe_collection(url, key, BASELINE_COLLECTION).await {
        reporter.emit(Severity::Error, &format!("Database check failed: {}", err));
        return Err(err);
    }
    reporter.emit(
        Severity::Success,
        &format!("Database reachable ({} read ok)", BASELINE_COLLECTION),
    );

    for collection in EXPECTED_COLLECTIONS {
        match probes.probe_collection(url, key, collection).await {
            Ok(()) => {
                reporter.emit(Severity::Success, &format!("Collection {} ok", collection));
            }
            Err(err) => {
                reporter.emit(
                    Severity::Error,
                    &format!("Collection {} check failed: {}", collection, err),
                );
            }
        }
    }

    Ok(())
}
