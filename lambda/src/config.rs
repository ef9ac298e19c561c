use std::env;

use first_names::Gender;

use crate::ConfigError;

/// Environment variable restricting names to one gender (`male`, `female` or `any`).
pub const GENDER_VAR: &str = "FIRST_NAME_GENDER";

/// Start-up configuration of the function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Table to draw from; `None` picks one at random per invocation.
    pub gender: Option<Gender>,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gender = match lookup(GENDER_VAR) {
            None => None,
            Some(value) if value.trim().is_empty() || value.trim().eq_ignore_ascii_case("any") => None,
            Some(value) => Some(value.parse::<Gender>().map_err(|source| ConfigError::InvalidGender {
                var: GENDER_VAR,
                source,
            })?),
        };

        Ok(Self { gender })
    }
}
