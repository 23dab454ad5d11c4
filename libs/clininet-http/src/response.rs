use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// A fully collected HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl HttpResponse {
    pub(crate) async fn collect(
        response: Response<Incoming>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let (parts, body) = response.into_parts();
        let collected = tokio::time::timeout(timeout, body.collect())
            .await
            .map_err(|_| HttpError::Timeout(timeout))?
            .map_err(|e| HttpError::Body(Box::new(e)))?;

        Ok(Self {
            status: parts.status,
            headers: parts.headers,
            body: collected.to_bytes(),
        })
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Consume the response, returning its parts for relaying.
    #[must_use]
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    /// Returns `HttpError::Json` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
