use std::fmt;

/// Result type for tally-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building display inputs
///
/// Rendering itself is total; errors only arise when parsing user-supplied
/// text into display flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Size name is not one of small, medium, large
    InvalidSize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(name) => write!(
                f,
                "Invalid display size '{}': expected small, medium or large",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
