//! Error type shared by the view parser and fixture validation.

use thiserror::Error;

/// Errors produced by the shared model.
#[derive(Debug, Error)]
pub enum Error {
    /// A string did not name one of the four views.
    #[error("unknown view `{0}`")]
    UnknownView(String),

    /// An outbound link could not be parsed as a URL.
    #[error("{field}: invalid url `{url}`")]
    InvalidUrl {
        /// Record field holding the link.
        field: &'static str,
        /// The offending value.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// An outbound link does not use https.
    #[error("{field}: `{url}` is not an https link")]
    InsecureUrl {
        /// Record field holding the link.
        field: &'static str,
        /// The offending value.
        url: String,
    },

    /// A publish date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date `{value}`")]
    InvalidDate {
        /// The offending value.
        value: String,
        /// Parser error.
        #[source]
        source: chrono::ParseError,
    },
}

/// Shorthand result type for the shared crate.
pub type Result<T> = std::result::Result<T, Error>;
