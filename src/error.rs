//! Error types for pfmt

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Foreground must be positive, background below the reset code
    #[error("invalid color combination: foreground {foreground}, background {background}")]
    InvalidColorCombination { foreground: i32, background: i32 },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
