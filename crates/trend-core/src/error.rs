// File: crates/trend-core/src/error.rs
// Summary: Error type shared by the core crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendError {
    /// The x layout divides by `N - 1`; fewer than two samples cannot be spaced.
    #[error("need at least 2 samples to lay out the x axis, got {0}")]
    TooFewSamples(usize),

    #[error("intersection threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    #[error("invalid chart frame: {0}")]
    InvalidFrame(&'static str),

    #[error("animation duration must be greater than zero")]
    InvalidDuration,

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T, E = TrendError> = std::result::Result<T, E>;
