use std::path::PathBuf;
use thiserror::Error;

pub const REGISTRATIONS_PATH: &str = "REGISTRATIONS_PATH";
pub const PRETTY_OUTPUT: &str = "PRETTY_OUTPUT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub registrations_path: PathBuf,
    pub pretty_output: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let registrations_path = lookup(REGISTRATIONS_PATH)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(REGISTRATIONS_PATH))?;

        let pretty_output = match lookup(PRETTY_OUTPUT) {
            None => false,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: PRETTY_OUTPUT,
                value,
            })?,
        };

        Ok(Self {
            registrations_path,
            pretty_output,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
