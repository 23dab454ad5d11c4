use std::time::Duration;

use bytes::Bytes;
use http::{Method, Request, Uri};
use http_body_util::Full;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::error::HttpError;
use crate::request::RequestBuilder;
use crate::response::HttpResponse;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for service-to-service calls.
///
/// `HttpClient` is `Clone + Send + Sync`; cloning shares the underlying
/// connection pool, so callers do not need any external locking.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client<HttpConnector, Full<Bytes>>,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client with the default request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            inner: Client::builder(TokioExecutor::new()).build_http(),
            timeout,
        }
    }

    /// Create a GET request builder for an absolute URL.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Create a request builder for an arbitrary method and absolute URL.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.clone(), method, url.to_owned())
    }

    /// Send a fully built request, enforcing the client timeout and
    /// collecting the response body into memory.
    ///
    /// Any HTTP status is returned as `Ok`; errors are transport-level only.
    ///
    /// # Errors
    /// Returns `HttpError` on invalid URL, timeout, or transport failure.
    pub async fn send(&self, req: Request<Full<Bytes>>) -> Result<HttpResponse, HttpError> {
        validate_uri(req.uri())?;

        let fut = self.inner.request(req);
        let response = tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| HttpError::Timeout(self.timeout))??;

        HttpResponse::collect(response, self.timeout).await
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_uri(uri: &Uri) -> Result<(), HttpError> {
    if uri.scheme().is_none() {
        return Err(HttpError::InvalidUri {
            url: uri.to_string(),
            reason: "missing scheme".to_owned(),
        });
    }
    if uri.authority().is_none() {
        return Err(HttpError::InvalidUri {
            url: uri.to_string(),
            reason: "missing authority".to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_url() {
        let uri: Uri = "/relative/path".parse().expect("parse");
        assert!(matches!(
            validate_uri(&uri),
            Err(HttpError::InvalidUri { .. })
        ));
    }

    #[test]
    fn accepts_absolute_url() {
        let uri: Uri = "http://127.0.0.1:8080/health".parse().expect("parse");
        assert!(validate_uri(&uri).is_ok());
    }
}
