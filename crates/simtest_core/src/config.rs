use std::env;
use std::time::Duration;

use crate::error::{CoreError, Domain, ErrorKind, Payload, Result};

pub const SERVICE_NAME_GET_ENTITY_STATE: &str = "GetEntityState";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SPIN_PERIOD: Duration = Duration::from_millis(100);
pub const DEFAULT_SERVICE_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub const ENV_TIMEOUT: &str = "SIMTEST_SPAWN_TIMEOUT";
pub const ENV_SPIN_PERIOD_MS: &str = "SIMTEST_SPIN_PERIOD_MS";
pub const ENV_SERVICE_POLL_MS: &str = "SIMTEST_SERVICE_POLL_MS";
pub const ENV_SERVICE_NAME: &str = "SIMTEST_ENTITY_STATE_SERVICE";

/// Knobs for one spawn wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitConfig {
    /// Budget for service readiness, and again for the reply.
    pub timeout: Duration,
    /// Upper bound of a single progress step on the pending request.
    pub spin_period: Duration,
    /// Delay between service readiness checks.
    pub service_poll_interval: Duration,
    pub service_name: String,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            spin_period: DEFAULT_SPIN_PERIOD,
            service_poll_interval: DEFAULT_SERVICE_POLL_INTERVAL,
            service_name: SERVICE_NAME_GET_ENTITY_STATE.to_string(),
        }
    }
}

impl WaitConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_spin_period(mut self, spin_period: Duration) -> Self {
        self.spin_period = spin_period;
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    /// Defaults overridden by `SIMTEST_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_TIMEOUT) {
            config.timeout = parse_secs(&value).ok_or_else(|| bad_env(ENV_TIMEOUT, &value))?;
        }
        if let Some(value) = lookup(ENV_SPIN_PERIOD_MS) {
            config.spin_period =
                parse_millis(&value).ok_or_else(|| bad_env(ENV_SPIN_PERIOD_MS, &value))?;
        }
        if let Some(value) = lookup(ENV_SERVICE_POLL_MS) {
            config.service_poll_interval =
                parse_millis(&value).ok_or_else(|| bad_env(ENV_SERVICE_POLL_MS, &value))?;
        }
        if let Some(value) = lookup(ENV_SERVICE_NAME) {
            config.service_name = value;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(CoreError::invalid_argument(
                Domain::Config,
                "timeout must be positive",
            ));
        }
        if self.spin_period.is_zero() || self.service_poll_interval.is_zero() {
            return Err(CoreError::invalid_argument(
                Domain::Config,
                "spin period and service poll interval must be positive",
            ));
        }
        if self.service_name.trim().is_empty() {
            return Err(CoreError::invalid_argument(
                Domain::Config,
                "service name must not be empty",
            ));
        }
        Ok(())
    }
}

/// Parse positive, finite seconds (`"2"`, `"0.5"`).
pub fn parse_secs(value: &str) -> Option<Duration> {
    let secs: f64 = value.trim().parse().ok()?;
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}

fn parse_millis(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
    }
}

fn bad_env(key: &'static str, value: &str) -> CoreError {
    CoreError::error()
        .domain(Domain::Config)
        .kind(ErrorKind::InvalidArgument)
        .msgf(format_args!("invalid value for {key}: {value:?}"))
        .payload(Payload::Context {
            key,
            value: value.to_string().into(),
        })
        .build()
}
