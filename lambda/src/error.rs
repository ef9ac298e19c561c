use first_names::{NameError, ParseGenderError};
use thiserror::Error;

/// Failures of a single invocation.
///
/// None of these are turned into a response; they are handed to the runtime,
/// which reports the invocation as failed.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The name source could not produce a name.
    #[error(transparent)]
    Name(#[from] NameError),
    /// The name source produced an empty string.
    #[error("name source returned an empty name")]
    EmptyName,
    /// The body could not be serialized.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Invalid start-up configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The gender variable held something other than `male`, `female` or `any`.
    #[error("invalid value for `{var}`: {source}")]
    InvalidGender {
        /// Name of the offending variable.
        var: &'static str,
        /// Parse failure.
        #[source]
        source: ParseGenderError,
    },
}
