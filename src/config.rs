//! Runtime configuration, read from environment variables.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Restaurant configuration.
///
/// Defaults reproduce the demo: queue numbers continue from 45 after the
/// three starter orders, and skipping costs 50 coins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantConfig {
    /// First queue number handed out to a new order.
    pub starting_queue_number: u32,
    /// Coins charged for a paid skip.
    pub skip_cost: u64,
    /// Mailbox buffer per actor.
    pub mailbox_capacity: usize,
    /// Broadcast buffer for queue events.
    pub event_capacity: usize,
    /// Delay before the kitchen simulator advances an order one step.
    pub kitchen_step_delay: Duration,
    /// Load the starter orders and the demo user.
    pub seed_demo_data: bool,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            starting_queue_number: 45,
            skip_cost: 50,
            mailbox_capacity: 32,
            event_capacity: 64,
            kitchen_step_delay: Duration::from_secs(10),
            seed_demo_data: true,
        }
    }
}

impl RestaurantConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `QUEUE_STARTING_NUMBER`   | `45`    |
    /// | `QUEUE_SKIP_COST`         | `50`    |
    /// | `ACTOR_MAILBOX_CAPACITY`  | `32`    |
    /// | `QUEUE_EVENT_CAPACITY`    | `64`    |
    /// | `KITCHEN_STEP_DELAY_SECS` | `10`    |
    /// | `SEED_DEMO_DATA`          | `true`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            starting_queue_number: parse_or(
                &lookup,
                "QUEUE_STARTING_NUMBER",
                defaults.starting_queue_number,
            )?,
            skip_cost: parse_or(&lookup, "QUEUE_SKIP_COST", defaults.skip_cost)?,
            mailbox_capacity: positive_or(
                &lookup,
                "ACTOR_MAILBOX_CAPACITY",
                defaults.mailbox_capacity,
            )?,
            event_capacity: positive_or(&lookup, "QUEUE_EVENT_CAPACITY", defaults.event_capacity)?,
            kitchen_step_delay: Duration::from_secs(parse_or(
                &lookup,
                "KITCHEN_STEP_DELAY_SECS",
                defaults.kitchen_step_delay.as_secs(),
            )?),
            seed_demo_data: flag_or(&lookup, "SEED_DEMO_DATA", defaults.seed_demo_data)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn positive_or<F>(lookup: &F, var: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, var, default)? {
        0 => Err(ConfigError::Invalid {
            var,
            value: "0".into(),
        }),
        n => Ok(n),
    }
}

fn flag_or<F>(lookup: &F, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RestaurantConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RestaurantConfig::default());
        assert_eq!(config.starting_queue_number, 45);
        assert_eq!(config.kitchen_step_delay, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = RestaurantConfig::from_lookup(lookup_from(&[
            ("QUEUE_STARTING_NUMBER", "100"),
            ("QUEUE_SKIP_COST", " 25 "),
            ("KITCHEN_STEP_DELAY_SECS", "2"),
            ("SEED_DEMO_DATA", "off"),
        ]))
        .unwrap();
        assert_eq!(config.starting_queue_number, 100);
        assert_eq!(config.skip_cost, 25);
        assert_eq!(config.kitchen_step_delay, Duration::from_secs(2));
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_malformed_values_name_the_variable() {
        assert_eq!(
            RestaurantConfig::from_lookup(lookup_from(&[("QUEUE_SKIP_COST", "fifty")])),
            Err(ConfigError::Invalid {
                var: "QUEUE_SKIP_COST",
                value: "fifty".into()
            })
        );
        assert!(matches!(
            RestaurantConfig::from_lookup(lookup_from(&[("ACTOR_MAILBOX_CAPACITY", "0")])),
            Err(ConfigError::Invalid { var: "ACTOR_MAILBOX_CAPACITY", .. })
        ));
        assert!(matches!(
            RestaurantConfig::from_lookup(lookup_from(&[("SEED_DEMO_DATA", "maybe")])),
            Err(ConfigError::Invalid { var: "SEED_DEMO_DATA", .. })
        ));
    }
}
