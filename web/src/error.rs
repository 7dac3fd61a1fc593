//! Startup errors for the expense web front end.
//!
//! Fetch failures are not in here: the view turns those into a rendered
//! state instead of an error response.

/// The errors that may stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("the environment variable '{0}' must be set")]
    MissingConfig(&'static str),

    /// An environment variable is set to something unusable.
    #[error("invalid value {value:?} for '{name}': {reason}")]
    InvalidConfig {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The HTTP client backing the API transport could not be built.
    #[error("could not build HTTP client: {0}")]
    HttpClient(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
