//! Hearth - minimal HTTP/1.1 request/response engine
//!
//! Core library for framing, parsing and encoding a single request and
//! response per connection.

pub mod config;
pub mod http;
pub mod server;
