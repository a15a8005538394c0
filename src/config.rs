//! Configuration types.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the REST/WebSocket server.
    pub port: u16,
    pub onboarding: OnboardingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            onboarding: OnboardingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `PARTNER_DESK_PORT` — server port
    /// - `PARTNER_DESK_SIGNATURE_DELAY_SECS` — simulated e-signature delay
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(port) = env::var("PARTNER_DESK_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PARTNER_DESK_PORT".to_string(),
                message: format!("'{port}' is not a valid port number"),
            })?;
        }

        if let Ok(secs) = env::var("PARTNER_DESK_SIGNATURE_DELAY_SECS") {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PARTNER_DESK_SIGNATURE_DELAY_SECS".to_string(),
                message: format!("'{secs}' is not a valid number of seconds"),
            })?;
            config.onboarding.signature_delay = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Configuration for the onboarding session core.
#[derive(Debug, Clone)]
pub struct OnboardingConfig {
    /// How long the simulated external signer takes to countersign after
    /// `send_for_signature`.
    pub signature_delay: Duration,
    /// Buffer capacity of the notification event channel.
    pub event_capacity: usize,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            signature_delay: Duration::from_secs(5),
            event_capacity: 64,
        }
    }
}
