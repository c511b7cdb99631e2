//! Runtime configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `REGISTRY_CHANNEL_CAPACITY` | `32` | Request buffer of each store's channel |
//! | `REGISTRY_SEED_SPEAKERS` | `false` | Insert the default speakers at startup |
//!
//! Unset or unparsable values fall back to the default.

use std::env;

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Configuration for [`RegistrySystem`](crate::lifecycle::RegistrySystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Buffer size of every actor's request channel. Zero is raised to one.
    pub channel_capacity: usize,
    /// Whether the speaker store starts with the default line-up.
    pub seed_speakers: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed_speakers: false,
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            channel_capacity: lookup("REGISTRY_CHANNEL_CAPACITY")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&capacity: &usize| capacity > 0)
                .unwrap_or(defaults.channel_capacity),
            seed_speakers: lookup("REGISTRY_SEED_SPEAKERS")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.seed_speakers),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
