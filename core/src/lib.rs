//! Minimal HTTP/1.1 client over raw TCP sockets.
//!
//! # Overview
//! Resolves an `http://` URL, writes a hand-built GET or POST request to a
//! fresh TCP connection, reads until the peer closes and pulls the status
//! code and body out of the raw text.
//!
//! # Design
//! - `HttpClient` is stateless between calls; every request opens, uses and
//!   closes its own socket.
//! - Each stage (`url`, `http`, `transport`, `parse`) is usable on its own and
//!   returns `Result<_, ClientError>`.
//! - Response parsing is line based and takes the last line as the body. It
//!   expects a single-line body followed by connection close; chunked,
//!   multi-line or binary bodies are not reconstructed.
//! - Only plain `http://` is supported. No TLS, redirects, keep-alive,
//!   timeouts or retries.

pub mod args;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod parse;
pub mod transport;
pub mod url;

pub use args::{ArgEncoding, RequestArgs};
pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Connection, TcpTransport, Transport};
pub use url::ParsedUrl;

/// One-line usage text for the command-line front end.
pub fn usage() -> &'static str {
    "httpclient [GET/POST] [URL]"
}
