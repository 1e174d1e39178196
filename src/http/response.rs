use crate::http::headers::HeaderList;

pub const HTTP_VERSION: &str = "HTTP/1.1";

/// An HTTP response waiting to be encoded.
///
/// `headers` holds only what the caller set; `Content-Length` and
/// `Connection` are added by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code, looked up in the status table at encode time
    pub code: u16,
    /// Version written at the start of the status line
    pub version: String,
    /// Caller-set headers, emitted in this order
    pub headers: HeaderList,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an empty `HTTP/1.1` response with the given status code.
    pub fn new(code: u16) -> Self {
        Self {
            code,
            version: HTTP_VERSION.to_string(),
            headers: HeaderList::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200).with_body(body)
    }

    /// Appends a header. Existing headers of the same name are kept.
    ///
    /// ```
    /// # use hearth::http::response::Response;
    /// let response = Response::new(204)
    ///     .with_header("Cache-Control", "no-cache")
    ///     .with_header("X-Trace", "1");
    /// assert_eq!(response.header_count(), 2);
    /// ```
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }
}
