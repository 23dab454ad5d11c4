use bytes::Bytes;
use http::{header, HeaderName, HeaderValue, Method, Request};
use http_body_util::Full;
use serde::Serialize;

use crate::client::HttpClient;
use crate::error::HttpError;
use crate::response::HttpResponse;

/// Builder for a single outbound request.
pub struct RequestBuilder {
    client: HttpClient,
    method: Method,
    url: String,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Bytes,
}

impl RequestBuilder {
    pub(crate) fn new(client: HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Add a header to the request. Invalid names/values are reported at
    /// `send` time.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    /// Set a JSON body (and content-type) from a serializable value.
    ///
    /// # Errors
    /// Returns `HttpError::Json` if serialization fails.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, HttpError> {
        self.body = Bytes::from(serde_json::to_vec(value)?);
        self.headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));
        Ok(self)
    }

    /// Set a raw body without touching headers.
    #[must_use]
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Send the request.
    ///
    /// # Errors
    /// Returns `HttpError` on build, timeout, or transport failure.
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let mut builder = Request::builder().method(self.method).uri(&self.url);
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        let req = builder.body(Full::new(self.body))?;
        self.client.send(req).await
    }
}
