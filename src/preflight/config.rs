//! Configuration completeness checks.

use crate::config::{PreflightEnv, OPTIONAL_KEYS, REQUIRED_KEYS};
use crate::report::{Reporter, Severity};
use crate::{Error, Result};

/// Check that every required variable is set.
///
/// All six keys are enumerated before aborting so an operator sees every
/// missing variable in a single run.
pub fn check_required(env: &PreflightEnv, reporter: &impl Reporter) -> Result<()> {
    let mut missing = Vec::new();

    for key in REQUIRED_KEYS {
        if env.get(key).is_some() {
            reporter.emit(Severity::Success, &format!("{} is set", key));
        } else {
            reporter.emit(Severity::Error, &format!("{} is missing", key));
            missing.push(key.to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::ConfigurationMissing(missing))
    }
}

/// Check optional variables. Absence is a warning, never fatal.
pub fn check_optional(env: &PreflightEnv, reporter: &impl Reporter) {
    for key in OPTIONAL_KEYS {
        if env.get(key).is_some() {
            reporter.emit(Severity::Success, &format!("{} is set", key));
        } else {
            reporter.emit(Severity::Warn, &format!("{} is not set (optional)", key));
        }
    }
}
