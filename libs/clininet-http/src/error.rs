use std::time::Duration;
use thiserror::Error;

/// HTTP client error types.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HttpError {
    /// Request building failed.
    #[error("Failed to build request: {0}")]
    RequestBuild(#[from] http::Error),

    /// Invalid URL (missing scheme/authority or malformed syntax).
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUri { url: String, reason: String },

    /// Request attempt timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Transport error (connection refused, reset, DNS, ...).
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON decoding of the response body failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<hyper::Error> for HttpError {
    fn from(err: hyper::Error) -> Self {
        HttpError::Transport(Box::new(err))
    }
}

impl From<hyper_util::client::legacy::Error> for HttpError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        HttpError::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug)]
    struct TestError(&'static str);

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Error for TestError {}

    #[test]
    fn transport_error_preserves_source() {
        let err = HttpError::Transport(Box::new(TestError("connection refused")));
        let source = err.source().and_then(|s| s.downcast_ref::<TestError>());
        assert_eq!(source.map(|e| e.0), Some("connection refused"));
    }
}
