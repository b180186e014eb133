//! Client configuration
//!
//! A `ClientConfig` names the account, carries the token-based credentials
//! and a few transport knobs. It can be loaded from YAML or from
//! environment variables.
//!
//! ```yaml
//! account_id: "1234567_SB1"
//! credentials:
//!   consumer_key: "..."
//!   consumer_secret: "..."
//!   token_id: "..."
//!   token_secret: "..."
//! timeout_secs: 60
//! ```

use crate::auth::{AuthConfig, Credentials};
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::types::HOST_SUFFIX;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "NS";

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account id (e.g. `1234567` or `1234567_SB1`)
    pub account_id: String,

    /// Token-based authentication secrets
    pub credentials: Credentials,

    /// Override the account host (tests, proxies)
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Stop a paginated fetch after this many pages
    #[serde(default)]
    pub max_pages: Option<usize>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("netsuite-rest/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with default transport settings
    pub fn new(account_id: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            account_id: account_id.into(),
            credentials,
            base_url: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_pages: None,
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Cap paginated fetches at `max_pages` pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Load from the process environment
    ///
    /// Reads `{PREFIX}_ACCOUNT_ID` (or `{PREFIX}_COMPANY_ID`),
    /// `{PREFIX}_REALM_ID`, `{PREFIX}_CLIENT_KEY`, `{PREFIX}_CLIENT_SECRET`,
    /// `{PREFIX}_TOKEN_ID`, `{PREFIX}_TOKEN_SECRET` and optionally
    /// `{PREFIX}_BASE_URL`.
    pub fn from_env(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, maps in tests)
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{prefix}_{name}")).filter(|v| !v.is_empty());
        let require = |name: &str| {
            var(name).ok_or_else(|| Error::missing_field(format!("{prefix}_{name}")))
        };

        let account_id = var("ACCOUNT_ID")
            .or_else(|| var("COMPANY_ID"))
            .ok_or_else(|| Error::missing_field(format!("{prefix}_ACCOUNT_ID")))?;

        let credentials = Credentials {
            consumer_key: require("CLIENT_KEY")?,
            consumer_secret: require("CLIENT_SECRET")?,
            token_id: require("TOKEN_ID")?,
            token_secret: require("TOKEN_SECRET")?,
            realm: var("REALM_ID"),
        };

        let mut config = Self::new(account_id, credentials);
        config.base_url = var("BASE_URL");
        config.validate()?;
        Ok(config)
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::missing_field("account_id"));
        }
        if let Some(field) = self.credentials.missing_fields().first() {
            return Err(Error::missing_field(format!("credentials.{field}")));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be greater than 0"));
        }
        if let Some(base_url) = &self.base_url {
            url::Url::parse(base_url)?;
        }
        Ok(())
    }

    /// Account host, e.g. `https://1234567-sb1.suitetalk.api.netsuite.com`
    ///
    /// The account id is lower-cased and `_` becomes `-`, as the vendor
    /// does for sandbox hostnames.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!(
                "https://{}.{HOST_SUFFIX}",
                self.account_id.to_lowercase().replace('_', "-")
            ),
        }
    }

    /// Realm for the `Authorization` header (account id when not set)
    pub fn realm(&self) -> String {
        self.credentials
            .realm()
            .map_or_else(|| self.account_id.clone(), ToString::to_string)
    }

    /// Runtime auth configuration
    pub fn auth_config(&self) -> AuthConfig {
        let mut credentials = self.credentials.clone();
        credentials.realm = Some(self.realm());
        AuthConfig::TokenBased(credentials)
    }

    /// Transport configuration
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(self.base_url())
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent)
            .build()
    }
}
