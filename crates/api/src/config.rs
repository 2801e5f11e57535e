//! API configuration, read from the environment.
//!
//! | variable                          | default        |
//! |-----------------------------------|----------------|
//! | `DEBTDESK_BIND_ADDR`              | `0.0.0.0:8080` |
//! | `DEBTDESK_UTC_OFFSET_MINUTES`     | `0`            |
//! | `DEBTDESK_FINE_RATE`              | `0.02`         |
//! | `DEBTDESK_MONTHLY_INTEREST_RATE`  | `0.01`         |

use core::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use debtdesk_collections::PenaltyPolicy;
use debtdesk_core::DomainError;

pub const BIND_ADDR_ENV: &str = "DEBTDESK_BIND_ADDR";
pub const UTC_OFFSET_ENV: &str = "DEBTDESK_UTC_OFFSET_MINUTES";
pub const FINE_RATE_ENV: &str = "DEBTDESK_FINE_RATE";
pub const MONTHLY_INTEREST_RATE_ENV: &str = "DEBTDESK_MONTHLY_INTEREST_RATE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Malformed {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{var}: offset of {minutes} minutes is out of range")]
    OffsetOutOfRange { var: &'static str, minutes: i32 },

    #[error("invalid penalty policy: {0}")]
    Policy(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
    /// Offset used to decide what "today" is when a request has no `asOf`.
    pub utc_offset: FixedOffset,
    pub policy: PenaltyPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            utc_offset: Utc.fix(),
            policy: PenaltyPolicy::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup(BIND_ADDR_ENV).unwrap_or(defaults.bind_addr);

        let utc_offset = match lookup(UTC_OFFSET_ENV) {
            Some(raw) => {
                let minutes: i32 = parse(UTC_OFFSET_ENV, "integer", &raw)?;
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or(ConfigError::OffsetOutOfRange {
                        var: UTC_OFFSET_ENV,
                        minutes,
                    })?
            }
            None => defaults.utc_offset,
        };

        let fine_rate = match lookup(FINE_RATE_ENV) {
            Some(raw) => parse::<Decimal>(FINE_RATE_ENV, "decimal", &raw)?,
            None => defaults.policy.fine_rate(),
        };
        let monthly_interest_rate = match lookup(MONTHLY_INTEREST_RATE_ENV) {
            Some(raw) => parse::<Decimal>(MONTHLY_INTEREST_RATE_ENV, "decimal", &raw)?,
            None => defaults.policy.monthly_interest_rate(),
        };
        let policy = PenaltyPolicy::new(fine_rate, monthly_interest_rate)?;

        Ok(Self {
            bind_addr,
            utc_offset,
            policy,
        })
    }
}

fn parse<T: FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Malformed {
        var,
        expected,
        value: raw.to_string(),
    })
}
