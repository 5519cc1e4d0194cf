//! HTTP/1.1 request and response values.
//!
//! # Design
//! A request is held as a request line, an ordered header list and an
//! optional body, and is turned into wire bytes by exactly one routine,
//! `HttpRequest::to_bytes`. The GET and POST constructors fix the header set
//! and its order. `HttpResponse` keeps the raw text it was parsed from so the
//! caller can always see what came off the wire.

use std::fmt;

use crate::error::ClientError;
use crate::parse;

pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const USER_AGENT: &str = "httpclient/1.0";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Map a command word to a method. Only the exact string `POST` selects
    /// POST; anything else, including unknown methods, is a GET.
    pub fn from_command(command: &str) -> Self {
        if command == "POST" {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path plus query, exactly as written on the request line.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// `GET` with `Host`, `User-Agent`, `Accept` and `Connection: close`.
    pub fn get(host: &str, target: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            target: target.to_string(),
            headers: vec![
                ("Host".to_string(), host.to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
                ("Accept".to_string(), "*/*".to_string()),
                ("Connection".to_string(), "close".to_string()),
            ],
            body: None,
        }
    }

    /// `POST` of a form-encoded body. `Content-Length` is the body's length
    /// in bytes; an empty body is still sent with `Content-Length: 0`.
    pub fn post(host: &str, target: &str, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            target: target.to_string(),
            headers: vec![
                ("Host".to_string(), host.to_string()),
                ("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()),
                ("Content-Length".to_string(), body.len().to_string()),
                ("Connection".to_string(), "close".to_string()),
            ],
            body: Some(body),
        }
    }

    /// Serialize as request line, CRLF-terminated headers, a blank line and
    /// the body with no trailing CRLF.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut text = format!("{} {} {HTTP_VERSION}\r\n", self.method, self.target);
        for (name, value) in &self.headers {
            text.push_str(name);
            text.push_str(": ");
            text.push_str(value);
            text.push_str("\r\n");
        }
        text.push_str("\r\n");
        if let Some(body) = &self.body {
            text.push_str(body);
        }
        text.into_bytes()
    }
}

/// A response as received from the peer.
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    code: u16,
    body: String,
    full_response: String,
}

impl HttpResponse {
    /// Parse the status code and body out of the raw response text.
    pub fn from_raw(raw: String) -> Result<Self, ClientError> {
        let code = parse::parse_status_code(&raw)?;
        let body = parse::parse_body(&raw).to_string();
        Ok(Self {
            code,
            body,
            full_response: raw,
        })
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// The last CRLF-separated line of the response.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn full_response(&self) -> &str {
        &self.full_response
    }

    /// Header lines of the raw response, each terminated with CRLF.
    pub fn headers(&self) -> String {
        parse::parse_headers(&self.full_response)
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_bytes() {
        let req = HttpRequest::get("example.com", "/");
        assert_eq!(
            String::from_utf8(req.to_bytes()).unwrap(),
            "GET / HTTP/1.1\r\nHost: example.com\r\nUser-Agent: httpclient/1.0\r\nAccept: */*\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn post_request_bytes() {
        let req = HttpRequest::post("example.com", "/submit", "a=1".to_string());
        assert_eq!(
            String::from_utf8(req.to_bytes()).unwrap(),
            "POST /submit HTTP/1.1\r\nHost: example.com\r\n\
             Content-Type: application/x-www-form-urlencoded; charset=utf-8\r\n\
             Content-Length: 3\r\nConnection: close\r\n\r\na=1"
        );
    }

    #[test]
    fn empty_post_has_zero_content_length() {
        let req = HttpRequest::post("example.com", "/", String::new());
        let text = String::from_utf8(req.to_bytes()).unwrap();
        assert!(text.contains("Content-Length: 0\r\n"));
        assert!(text.ends_with("Connection: close\r\n\r\n"));
    }

    #[test]
    fn content_length_counts_bytes() {
        let req = HttpRequest::post("example.com", "/", "k=é".to_string());
        assert!(req
            .headers
            .contains(&("Content-Length".to_string(), "4".to_string())));
    }

    #[test]
    fn unknown_commands_fall_back_to_get() {
        assert_eq!(HttpMethod::from_command("POST"), HttpMethod::Post);
        assert_eq!(HttpMethod::from_command("GET"), HttpMethod::Get);
        assert_eq!(HttpMethod::from_command("PUT"), HttpMethod::Get);
        assert_eq!(HttpMethod::from_command("post"), HttpMethod::Get);
    }

    #[test]
    fn response_displays_raw_text() {
        let raw = "HTTP/1.1 201 Created\r\nX-A: b\r\n\r\ndone".to_string();
        let resp = HttpResponse::from_raw(raw.clone()).unwrap();
        assert_eq!(resp.code(), 201);
        assert_eq!(resp.body(), "done");
        assert_eq!(resp.headers(), "X-A: b\r\n");
        assert_eq!(resp.to_string(), raw);
    }
}
