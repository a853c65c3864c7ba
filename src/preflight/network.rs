//! Network configuration sanity check. Purely advisory, never fatal.

use crate::config::PreflightEnv;
use crate::report::{Reporter, Severity};

pub fn check(env: &PreflightEnv, reporter: &impl Reporter) {
    reporter.emit(Severity::Info, &format!("Port: {}", env.port()));

    if let Some(host_url) = env.get("HOST_URL") {
        reporter.emit(Severity::Info, &format!("Host URL: {}", host_url));
        if !env.host_url_has_scheme() {
            reporter.emit(
                Severity::Warn,
                "HOST_URL does not start with http:// or https://",
            );
        }
    }
}
