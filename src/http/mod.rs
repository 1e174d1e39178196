//! HTTP protocol implementation.
//!
//! This module implements a one-request-per-connection HTTP/1.1 server core.
//!
//! # Architecture
//!
//! - **`headers`**: Ordered header list shared by requests and responses
//! - **`frame`**: Reads a bounded buffer and splits it at `\r\n\r\n`
//! - **`parser`**: Parses the request line and header lines
//! - **`request`**: Parsed request representation
//! - **`status`**: Immutable status code to reason phrase table
//! - **`response`**: Response representation with builder methods
//! - **`writer`**: Encodes responses and writes them to the client
//! - **`connection`**: The per-connection request-response state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Fill buffer until \r\n\r\n, EOF or full
//!        └──────┬──────┘
//!               │ Frame read          (nothing read → Closed)
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ← Request line + header lines
//!        └──────┬──────┘
//!               │ Valid request       (malformed → Closed)
//!               ▼
//!        ┌─────────────┐
//!        │ Processing  │ ← Handler builds the response
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Encoding   │ ← Unknown status or too large → Closed
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Writing   │ ← Send every byte
//!        └──────┬──────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hearth::config::Config;
//! use hearth::http::connection::Connection;
//! use hearth::http::status::StatusTable;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(Config::default());
//!     let statuses = Arc::new(StatusTable::default());
//!     let listener = TcpListener::bind(config.listen_addr()).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, config.clone(), statuses.clone());
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod frame;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod status;
pub mod writer;
