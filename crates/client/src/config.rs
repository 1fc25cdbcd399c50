//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the client. Only
//! [`RawConfig::from_env`] reads the process environment; everything else works on values
//! handed to it, which keeps resolution testable without touching global state.

use crate::retry::RetryPolicy;
use crate::{ClientError, ClientResult};
use std::str::FromStr;
use std::time::Duration;
use triage_types::{ApiKey, BaseUrl};

pub const DEFAULT_BASE_URL: &str = "https://assessment.ksensetech.com/api";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_API_KEY: &str = "ASSESSMENT_API_KEY";
pub const ENV_BASE_URL: &str = "ASSESSMENT_BASE_URL";
pub const ENV_MAX_RETRIES: &str = "ASSESSMENT_MAX_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "ASSESSMENT_RETRY_DELAY_MS";
pub const ENV_PAGE_LIMIT: &str = "ASSESSMENT_PAGE_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "ASSESSMENT_TIMEOUT_SECS";

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    max_retries: u32,
    retry_delay: Duration,
    page_limit: u32,
    request_timeout: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig` with default retry, paging and timeout settings.
    pub fn new(api_key: ApiKey, base_url: BaseUrl) -> Self {
        Self {
            api_key,
            base_url,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            page_limit: DEFAULT_PAGE_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Sets the number of patients requested per page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `page_limit` is zero.
    pub fn with_page_limit(mut self, page_limit: u32) -> ClientResult<Self> {
        if page_limit == 0 {
            return Err(ClientError::Config("page limit must be at least 1".into()));
        }
        self.page_limit = page_limit;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_delay)
    }
}

/// Unparsed configuration values, one per environment variable.
#[derive(Clone, Debug, Default)]
pub struct RawConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub max_retries: Option<String>,
    pub retry_delay_ms: Option<String>,
    pub page_limit: Option<String>,
    pub timeout_secs: Option<String>,
}

impl RawConfig {
    /// Reads the `ASSESSMENT_*` variables from the process environment.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self {
            api_key: var(ENV_API_KEY),
            base_url: var(ENV_BASE_URL),
            max_retries: var(ENV_MAX_RETRIES),
            retry_delay_ms: var(ENV_RETRY_DELAY_MS),
            page_limit: var(ENV_PAGE_LIMIT),
            timeout_secs: var(ENV_TIMEOUT_SECS),
        }
    }

    /// Validates the raw values and fills in defaults for blank ones.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the API key is missing, the base URL is invalid, or a
    /// numeric setting does not parse.
    pub fn resolve(self) -> ClientResult<ClientConfig> {
        let api_key = non_blank(self.api_key)
            .ok_or_else(|| ClientError::Config(format!("{ENV_API_KEY} is not set")))?;
        let api_key = ApiKey::new(api_key)?;

        let base_url = non_blank(self.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let base_url = BaseUrl::new(base_url)?;

        let max_retries = parse_setting(ENV_MAX_RETRIES, self.max_retries, DEFAULT_MAX_RETRIES)?;
        let retry_delay_ms = parse_setting(
            ENV_RETRY_DELAY_MS,
            self.retry_delay_ms,
            DEFAULT_RETRY_DELAY.as_millis() as u64,
        )?;
        let page_limit = parse_setting(ENV_PAGE_LIMIT, self.page_limit, DEFAULT_PAGE_LIMIT)?;
        let timeout_secs = parse_setting(
            ENV_TIMEOUT_SECS,
            self.timeout_secs,
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        )?;

        ClientConfig::new(api_key, base_url)
            .with_max_retries(max_retries)
            .with_retry_delay(Duration::from_millis(retry_delay_ms))
            .with_request_timeout(Duration::from_secs(timeout_secs))
            .with_page_limit(page_limit)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an optional setting, falling back to `default` when it is absent or blank.
fn parse_setting<T: FromStr>(name: &str, value: Option<String>, default: T) -> ClientResult<T> {
    match non_blank(value) {
        None => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|_| ClientError::Config(format!("{name} is not a valid number: '{v}'"))),
    }
}
