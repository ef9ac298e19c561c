use rand::distributions::WeightedError;
use thiserror::Error;

/// Errors raised by a [`NameSource`](crate::NameSource).
#[derive(Debug, Error)]
pub enum NameError {
    /// The weighted table could not be sampled.
    #[error("name table cannot be sampled: {0}")]
    Table(#[from] WeightedError),
    /// The underlying source failed to produce a name.
    #[error("name source unavailable: {source}")]
    Unavailable {
        /// The failure reported by the source.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl NameError {
    /// Wrap an arbitrary failure of a name source.
    pub fn unavailable<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        NameError::Unavailable { source: source.into() }
    }
}
