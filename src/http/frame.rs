use bytes::{Buf, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{trace, warn};

const SEPARATOR: &[u8] = b"\r\n\r\n";

/// Raw request split at the header/body separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Everything before `\r\n\r\n`, or the whole buffer if no separator
    /// arrived before the peer stopped sending or the buffer filled.
    pub head: String,
    /// Bytes after the separator that arrived in the same buffer fill.
    /// `None` when no separator was found.
    pub body: Option<Bytes>,
}

/// Reads one request frame into a buffer of `max_reqsize` bytes.
///
/// Receives until the separator shows up or at most one byte of capacity is
/// left. End of stream and receive errors both stop the loop; whatever was
/// read so far is then returned as header text with no body. Returns `None`
/// if nothing was read at all.
///
/// A body that does not fit in the buffer is truncated silently.
pub async fn read_frame<S>(stream: &mut S, max_reqsize: usize) -> Option<Frame>
where
    S: AsyncRead + Unpin,
{
    let mut buf = BytesMut::zeroed(max_reqsize);
    let mut filled = 0;

    while filled + 1 < max_reqsize {
        let n = match stream.read(&mut buf[filled..]).await {
            Ok(0) => {
                trace!(filled, "peer closed before separator");
                break;
            }
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, filled, "receive failed while reading request");
                break;
            }
        };
        filled += n;

        // The separator can straddle two reads, so scan from the start.
        if let Some(pos) = find_separator(&buf[..filled]) {
            buf.truncate(filled);
            let head = buf.split_to(pos);
            buf.advance(SEPARATOR.len());

            return Some(Frame {
                head: String::from_utf8_lossy(&head).into_owned(),
                body: Some(buf.freeze()),
            });
        }
    }

    if filled == 0 {
        return None;
    }

    Some(Frame {
        head: String::from_utf8_lossy(&buf[..filled]).into_owned(),
        body: None,
    })
}

/// Offset of the first `\r\n\r\n` in `buf`.
pub fn find_separator(buf: &[u8]) -> Option<usize> {
    buf.windows(SEPARATOR.len())
        .position(|w| w == SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_position() {
        assert_eq!(find_separator(b"GET / HTTP/1.1\r\n\r\nbody"), Some(14));
        assert_eq!(find_separator(b"GET / HTTP/1.1\r\n"), None);
        assert_eq!(find_separator(b""), None);
    }
}
