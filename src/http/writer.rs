use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;
use crate::http::status::StatusTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("no reason phrase for status code {0}")]
    UnknownStatus(u16),
}

/// Encodes a response into its wire form.
///
/// Output is the status line, the caller's headers in order followed by
/// `Content-Length` and `Connection: close`, a blank line, then the body
/// verbatim. Taking the response by value means the two synthesized headers
/// are appended exactly once.
///
/// Fails without producing any output if the status code is not in `table`.
pub fn encode(mut response: Response, table: &StatusTable) -> Result<Bytes, EncodeError> {
    let reason = table
        .reason(response.code)
        .ok_or(EncodeError::UnknownStatus(response.code))?;

    response
        .headers
        .add("Content-Length", response.body.len().to_string());
    response.headers.add("Connection", "close");

    let status_line = format!("{} {} {}\r\n", response.version, response.code, reason);
    let headers_len: usize = response
        .headers
        .iter()
        .map(|h| h.name.len() + h.value.len() + 4)
        .sum();

    let mut buf =
        BytesMut::with_capacity(status_line.len() + headers_len + 2 + response.body.len());

    buf.put_slice(status_line.as_bytes());

    for header in &response.headers {
        buf.put_slice(header.name.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(header.value.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&response.body);

    Ok(buf.freeze())
}

/// Writes an encoded response, retrying until every byte is accepted.
pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(encoded: Bytes) -> Self {
        Self {
            buffer: encoded,
            written: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!(
                    "connection closed while writing ({} of {} bytes sent)",
                    self.written,
                    self.buffer.len()
                ));
            }

            self.written += n;
        }

        stream.flush().await?;

        Ok(())
    }
}
