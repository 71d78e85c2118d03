use thiserror::Error;

/// Errors that can occur while parsing, building or expanding URLs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not a valid absolute URI
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    /// Scheme is not `http` or `https`
    #[error("invalid scheme `{scheme}`, expected `http` or `https`")]
    InvalidScheme { scheme: String },
    /// Hostname is empty at build time
    #[error("missing host")]
    MissingHost,
    /// Host (or its port) was rejected by the URL parser
    #[error("invalid host `{host}`: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
    /// Username or password could not be attached to the URL
    #[error("URL cannot carry credentials")]
    InvalidUserinfo,
    /// A `{name}` placeholder has no bound value
    #[error("failed to find template value for `{name}`")]
    MissingTemplateValue { name: String },
    /// A bound value cannot be written as a single literal segment
    #[error("template value `{value}` for `{name}` is not a valid path segment")]
    InvalidTemplateValue { name: String, value: String },
}

/// Result type for URL operations
pub type Result<T> = core::result::Result<T, Error>;
