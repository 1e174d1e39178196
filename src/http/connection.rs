use std::sync::Arc;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::http::frame::{self, Frame};
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::status::StatusTable;
use crate::http::writer::{ResponseWriter, encode};

/// Produces the response for a parsed request.
pub type Handler = fn(&Request) -> Response;

const HELLO_BODY: &str = "<html><body><h4>Hello</h4></body></html>";

/// Serves exactly one request on `stream`, then closes it.
pub struct Connection<S> {
    stream: S,
    config: Arc<Config>,
    statuses: Arc<StatusTable>,
    handler: Handler,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsing(Frame),
    Processing(Request, Option<Bytes>),
    Encoding(Response),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>, statuses: Arc<StatusTable>) -> Self {
        Self {
            stream,
            config,
            statuses,
            handler: hello,
            state: ConnectionState::Reading,
        }
    }

    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.handler = handler;
        self
    }

    /// Runs the connection to completion and shuts the stream down.
    ///
    /// Read, parse, encode and size-limit failures close the connection
    /// without a response and are only logged. A failed send is returned.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "shutdown after response failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => match self.read_frame().await {
                    Some(frame) => ConnectionState::Parsing(frame),
                    None => {
                        warn!("no request data received from client");
                        ConnectionState::Closed
                    }
                },

                ConnectionState::Parsing(frame) => match parse_request(&frame.head) {
                    Ok(request) => ConnectionState::Processing(request, frame.body),
                    Err(e) => {
                        warn!(error = %e, "malformed request, closing without response");
                        ConnectionState::Closed
                    }
                },

                ConnectionState::Processing(request, body) => {
                    log_request(&request, body.as_deref());
                    ConnectionState::Encoding((self.handler)(&request))
                }

                ConnectionState::Encoding(response) => {
                    let code = response.code;
                    match encode(response, &self.statuses) {
                        Ok(encoded) if encoded.len() >= self.config.max_ressize => {
                            warn!(
                                size = encoded.len(),
                                max_ressize = self.config.max_ressize,
                                "response exceeds max_ressize, not sent"
                            );
                            ConnectionState::Closed
                        }
                        Ok(encoded) => ConnectionState::Writing(ResponseWriter::new(encoded)),
                        Err(e) => {
                            error!(code, error = %e, "failed to encode response");
                            ConnectionState::Closed
                        }
                    }
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    debug!(bytes = writer.written(), "response sent");
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    async fn read_frame(&mut self) -> Option<Frame> {
        let max_reqsize = self.config.max_reqsize;

        match self.config.read_timeout() {
            Some(limit) => {
                match timeout(limit, frame::read_frame(&mut self.stream, max_reqsize)).await {
                    Ok(frame) => frame,
                    Err(_) => {
                        let timeout_ms = limit.as_millis();
                        warn!(%timeout_ms, "timed out reading request");
                        None
                    }
                }
            }
            None => frame::read_frame(&mut self.stream, max_reqsize).await,
        }
    }
}

fn hello(_request: &Request) -> Response {
    Response::ok(HELLO_BODY)
}

fn log_request(request: &Request, body: Option<&[u8]>) {
    debug!(
        method = %request.method,
        path = %request.path,
        version = %request.version,
        headers = request.header_count(),
        "Resource requested"
    );

    for header in &request.headers {
        debug!(name = %header.name, value = %header.value, "request header");
    }

    if let Some(body) = body {
        debug!(body = %String::from_utf8_lossy(body), "request body");
    }
}
