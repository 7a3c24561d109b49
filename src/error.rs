use std::path::PathBuf;

/// Error type for drush-make loading and parsing.
///
/// Only load-level failures are errors. Lines inside a makefile that do not
/// match a known shape are skipped, never reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The makefile could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The key/value structure of the makefile could not be loaded.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for drush-make operations.
pub type Result<T> = std::result::Result<T, Error>;
