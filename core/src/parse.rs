//! Line-based extraction of status code, headers and body from raw response
//! text.
//!
//! The response is split on CRLF and nothing else. The body is taken to be
//! the last line, so bodies containing CRLF, or responses ending in CRLF,
//! are not returned whole. This matches a server that sends a single-line
//! body and then closes the connection; it is not a general HTTP parser.

use crate::error::ClientError;

/// Second whitespace-separated token of the first line, as an integer.
pub fn parse_status_code(raw: &str) -> Result<u16, ClientError> {
    let status_line = raw.split("\r\n").next().unwrap_or_default();
    let token = status_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ClientError::Parse(format!("no status code in {status_line:?}")))?;
    token
        .parse()
        .map_err(|_| ClientError::Parse(format!("status code {token:?} is not a number")))
}

/// Lines between the status line and the last two lines, each followed by
/// CRLF.
pub fn parse_headers(raw: &str) -> String {
    let lines: Vec<&str> = raw.split("\r\n").collect();
    let end = lines.len().saturating_sub(2);
    let mut headers = String::new();
    for line in lines.iter().take(end).skip(1) {
        headers.push_str(line);
        headers.push_str("\r\n");
    }
    headers
}

/// Last CRLF-separated line.
pub fn parse_body(raw: &str) -> &str {
    raw.rsplit("\r\n").next().unwrap_or_default()
}
