use crate::http::headers::HeaderList;

/// A parsed HTTP request head.
///
/// Only produced by [`parse_request`](crate::http::parser::parse_request),
/// so holding a `Request` means the request line and every header line
/// parsed. No method, path or version validation is applied beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token as sent (e.g. "GET")
    pub method: String,
    /// The request target as sent, query string included
    pub path: String,
    /// Everything after the second space of the request line
    pub version: String,
    /// Header fields in wire order
    pub headers: HeaderList,
}

impl Request {
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// First header value stored under exactly `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}
