//! Environment snapshot consumed by the checker.
//!
//! All variables are read once at startup into an immutable [`PreflightEnv`]
//! so checks never touch process-wide state and tests can inject fixtures
//! without mutating the environment.

/// Variables that must be set (non-empty) for the bot to start.
pub const REQUIRED_KEYS: [&str; 6] = [
    "BOT_TOKEN",
    "SUPABASE_URL",
    "SUPABASE_KEY",
    "ADMIN_ID",
    "ADMIN_GROUP_ID",
    "HOST_URL",
];

/// Variables that are useful but not mandatory; absence is a warning.
pub const OPTIONAL_KEYS: [&str; 2] = ["PAYMENT_CHANNEL", "WEBHOOK_SECRET"];

/// Port reported when `PORT` is absent or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Immutable snapshot of the configuration variables the checker inspects.
///
/// Empty-string values are treated as absent everywhere.
#[derive(Debug, Clone, Default)]
pub struct PreflightEnv {
    pub bot_token: Option<String>,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub admin_id: Option<String>,
    pub admin_group_id: Option<String>,
    pub host_url: Option<String>,
    pub payment_channel: Option<String>,
    pub webhook_secret: Option<String>,
    pub port: Option<String>,
}

impl PreflightEnv {
    /// Snapshot the process environment. Called once, at startup.
    pub fn from_process() -> Self {
        Self {
            bot_token: read_var("BOT_TOKEN"),
            supabase_url: read_var("SUPABASE_URL"),
            supabase_key: read_var("SUPABASE_KEY"),
            admin_id: read_var("ADMIN_ID"),
            admin_group_id: read_var("ADMIN_GROUP_ID"),
            host_url: read_var("HOST_URL"),
            payment_channel: read_var("PAYMENT_CHANNEL"),
            webhook_secret: read_var("WEBHOOK_SECRET"),
            port: read_var("PORT"),
        }
    }

    /// Look up a variable by its environment name. Empty values count as
    /// absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "BOT_TOKEN" => self.bot_token.as_deref(),
            "SUPABASE_URL" => self.supabase_url.as_deref(),
            "SUPABASE_KEY" => self.supabase_key.as_deref(),
            "ADMIN_ID" => self.admin_id.as_deref(),
            "ADMIN_GROUP_ID" => self.admin_group_id.as_deref(),
            "HOST_URL" => self.host_url.as_deref(),
            "PAYMENT_CHANNEL" => self.payment_channel.as_deref(),
            "WEBHOOK_SECRET" => self.webhook_secret.as_deref(),
            "PORT" => self.port.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }

    /// Required keys that are absent, in declaration order.
    pub fn required_missing(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| self.get(key).is_none())
            .collect()
    }

    /// The configured port, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.get("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// Whether the host URL starts with a recognized URL scheme prefix.
    pub fn host_url_has_scheme(&self) -> bool {
        self.get("HOST_URL")
            .map(|url| url.starts_with("http://") || url.starts_with("https://"))
            .unwrap_or(false)
    }
}

fn read_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_host(host_url: Option<&str>) -> PreflightEnv {
        PreflightEnv {
            host_url: host_url.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_missing_empty_env() {
        let env = PreflightEnv::default();
        assert_eq!(env.required_missing(), REQUIRED_KEYS.to_vec());
    }

    #[test]
    fn test_required_missing_preserves_declaration_order() {
        let env = PreflightEnv {
            supabase_url: Some("https://demo.supabase.co".to_string()),
            admin_id: Some("42".to_string()),
            ..Default::default()
        };
        assert_eq!(
            env.required_missing(),
            vec!["BOT_TOKEN", "SUPABASE_KEY", "ADMIN_GROUP_ID", "HOST_URL"]
        );
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let env = PreflightEnv {
            bot_token: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(env.get("BOT_TOKEN"), None);
        assert!(env.required_missing().contains(&"BOT_TOKEN"));
    }

    #[test]
    fn test_port_default() {
        let env = PreflightEnv::default();
        assert_eq!(env.port(), 3000);
    }

    #[test]
    fn test_port_parses_configured_value() {
        let env = PreflightEnv {
            port: Some("8080".to_string()),
            ..Default::default()
        };
        assert_eq!(env.port(), 8080);
    }

    #[test]
    fn test_port_unparsable_falls_back_to_default() {
        let env = PreflightEnv {
            port: Some("not-a-port".to_string()),
            ..Default::default()
        };
        assert_eq!(env.port(), 3000);
    }

    #[test]
    fn test_host_url_scheme_detection() {
        assert!(env_with_host(Some("https://example.com")).host_url_has_scheme());
        assert!(env_with_host(Some("http://example.com")).host_url_has_scheme());
        assert!(!env_with_host(Some("example.com")).host_url_has_scheme());
        assert!(!env_with_host(Some("ftp://example.com")).host_url_has_scheme());
        assert!(!env_with_host(None).host_url_has_scheme());
    }
}
