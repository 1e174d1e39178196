use crate::http::headers::HeaderList;
use crate::http::request::Request;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty request head")]
    MissingRequestLine,

    /// The request line has fewer than two spaces.
    #[error("malformed request line: {0:?}")]
    RequestLine(String),

    /// A header line has no colon.
    #[error("malformed header line: {0:?}")]
    MalformedHeader(String),
}

/// Parses a request head (the text before `\r\n\r\n`).
///
/// The first line is split on its first two spaces into method, path and
/// version. Every following line is split on its first colon, and both sides
/// are trimmed. Empty lines are skipped and a trailing `\r` is dropped from
/// each line. Parsing stops at the first bad line; nothing parsed before it
/// is returned.
pub fn parse_request(head: &str) -> Result<Request, ParseError> {
    let mut lines = head
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let request_line = lines.next().ok_or(ParseError::MissingRequestLine)?;
    let (method, path, version) = parse_request_line(request_line)?;

    let mut headers = HeaderList::new();
    for line in lines {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;

        headers.add(trim_whitespace(name), trim_whitespace(value));
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

fn parse_request_line(line: &str) -> Result<(&str, &str, &str), ParseError> {
    let malformed = || ParseError::RequestLine(line.to_string());

    let (method, rest) = line.split_once(' ').ok_or_else(malformed)?;
    let (path, version) = rest.split_once(' ').ok_or_else(malformed)?;

    Ok((method, path, version))
}

/// Strips leading and trailing space, tab, CR, LF, vertical tab and form feed.
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}
