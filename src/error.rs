use std::fmt;

/// Error returned while building or merging the Tyk extension.
///
/// These are sentinel values: callers match on the variant to decide how to
/// report the failure. None of them is fatal; every call is independent and
/// may be retried against a corrected document or override set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The caller-supplied `upstreamURL` override is not an absolute URL
    /// (scheme + host).
    InvalidUpstreamUrl,
    /// The document's first `servers` entry is not an absolute URL and was
    /// needed as the upstream fallback.
    InvalidServerUrl,
    /// No upstream override was supplied and the document declares zero
    /// servers.
    EmptyServersObject,
    /// Authentication import was requested but the document declares no
    /// security requirements.
    EmptySecurityObject,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidUpstreamUrl => write!(f, "invalid upstream URL"),
            BuildError::InvalidServerUrl => {
                write!(f, "error validating servers entry in OAS")
            }
            BuildError::EmptyServersObject => {
                write!(f, "servers object is empty in OAS")
            }
            BuildError::EmptySecurityObject => {
                write!(f, "security object is empty in OAS")
            }
        }
    }
}

impl std::error::Error for BuildError {}
