use hearth::http::parser::{ParseError, parse_request, trim_whitespace};

#[test]
fn test_parse_simple_get_request() {
    let parsed = parse_request("GET / HTTP/1.1\r\nHost: example.com").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header_count(), 1);
    assert_eq!(parsed.header("Host"), Some("example.com"));
}

#[test]
fn test_parse_multiple_headers_in_wire_order() {
    let parsed = parse_request(
        "GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*",
    )
    .unwrap();

    let pairs: Vec<_> = parsed
        .headers
        .iter()
        .map(|h| (h.name.as_str(), h.value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("Host", "example.com"),
            ("User-Agent", "test-client"),
            ("Accept", "*/*"),
        ]
    );
}

#[test]
fn test_parse_header_count_matches_lines() {
    let names = ["A", "B", "C", "D", "E"];
    let mut head = String::from("POST /submit HTTP/1.0");
    for (i, name) in names.iter().enumerate() {
        head.push_str(&format!("\r\n{name}:value{i}"));
    }

    let parsed = parse_request(&head).unwrap();

    assert_eq!(parsed.header_count(), names.len());
    for (i, name) in names.iter().enumerate() {
        assert_eq!(parsed.header(name), Some(format!("value{i}").as_str()));
    }
}

#[test]
fn test_parse_trims_names_and_values() {
    let parsed = parse_request("GET / HTTP/1.1\r\n  X-Padded \t:   spaced out \t").unwrap();

    assert_eq!(parsed.header("X-Padded"), Some("spaced out"));
}

#[test]
fn test_parse_value_keeps_later_colons() {
    let parsed = parse_request("GET / HTTP/1.1\r\nHost: localhost:8080").unwrap();

    assert_eq!(parsed.header("Host"), Some("localhost:8080"));
}

#[test]
fn test_parse_duplicate_headers_kept() {
    let parsed = parse_request("GET / HTTP/1.1\r\nAccept: a\r\nAccept: b").unwrap();

    assert_eq!(parsed.header_count(), 2);
    assert_eq!(parsed.header("Accept"), Some("a"));
}

#[test]
fn test_parse_no_case_normalization() {
    let parsed = parse_request("GET / HTTP/1.1\r\ncontent-type: text/plain").unwrap();

    assert_eq!(parsed.header("content-type"), Some("text/plain"));
    assert_eq!(parsed.header("Content-Type"), None);
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let parsed = parse_request("GET /search?q=rust HTTP/1.1").unwrap();

    assert_eq!(parsed.path, "/search?q=rust");
    assert_eq!(parsed.header_count(), 0);
}

#[test]
fn test_parse_unknown_method_and_version_accepted() {
    let parsed = parse_request("BREW /pot HTCPCP/1.0").unwrap();

    assert_eq!(parsed.method, "BREW");
    assert_eq!(parsed.version, "HTCPCP/1.0");
}

#[test]
fn test_parse_version_keeps_extra_spaces() {
    let parsed = parse_request("GET / HTTP/1.1 extra").unwrap();

    assert_eq!(parsed.version, "HTTP/1.1 extra");
}

#[test]
fn test_parse_bare_newlines() {
    let parsed = parse_request("GET / HTTP/1.1\nHost: x").unwrap();

    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("x"));
}

#[test]
fn test_parse_request_line_one_space_rejected() {
    let result = parse_request("GET /\r\nHost: example.com");

    assert!(matches!(result, Err(ParseError::RequestLine(line)) if line == "GET /"));
}

#[test]
fn test_parse_request_line_no_space_rejected() {
    let result = parse_request("GARBAGE\r\nBrokenHeader");

    // Header lines are never looked at once the request line fails.
    assert!(matches!(result, Err(ParseError::RequestLine(_))));
}

#[test]
fn test_parse_empty_head_rejected() {
    assert_eq!(parse_request(""), Err(ParseError::MissingRequestLine));
}

#[test]
fn test_parse_malformed_header_first() {
    let result = parse_request("GET / HTTP/1.1\r\nBrokenHeader\r\nHost: x");

    assert!(matches!(result, Err(ParseError::MalformedHeader(line)) if line == "BrokenHeader"));
}

#[test]
fn test_parse_malformed_header_last() {
    let result = parse_request("GET / HTTP/1.1\r\nHost: x\r\nAccept: */*\r\nBrokenHeader");

    assert!(matches!(result, Err(ParseError::MalformedHeader(_))));
}

#[test]
fn test_trim_whitespace_idempotent() {
    for input in ["  a  ", "\tvalue\r\n", "x", "", "a b c", " \x0b\x0c "] {
        let once = trim_whitespace(input);
        assert_eq!(trim_whitespace(once), once);
    }
}

#[test]
fn test_trim_whitespace_only() {
    assert_eq!(trim_whitespace("   \t\r\n"), "");
    assert_eq!(trim_whitespace(" keep inner  space "), "keep inner  space");
}
