//! Request pipeline and command dispatch.
//!
//! # Design
//! `HttpClient` holds only its configuration and a `Transport`; it carries no
//! per-request state. Each call resolves the URL, builds an `HttpRequest`,
//! hands its bytes to the transport for one exchange and parses the raw text
//! that comes back. No step is retried.

use crate::args::RequestArgs;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{TcpTransport, Transport};
use crate::url::{has_http_scheme, ParsedUrl};

/// Synchronous HTTP/1.1 client issuing one connection per request.
#[derive(Debug, Clone)]
pub struct HttpClient<T = TcpTransport> {
    config: ClientConfig,
    transport: T,
}

impl HttpClient<TcpTransport> {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = TcpTransport::new(config.read_chunk_size);
        Self { config, transport }
    }
}

impl Default for HttpClient<TcpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate the URL, then run the POST pipeline when `command` is
    /// exactly `POST` and the GET pipeline for anything else.
    pub fn command(
        &self,
        url: &str,
        command: &str,
        args: Option<&RequestArgs>,
    ) -> Result<HttpResponse, ClientError> {
        self.execute(url, HttpMethod::from_command(command), args)
    }

    /// Same as `command` with the method already chosen.
    pub fn execute(
        &self,
        url: &str,
        method: HttpMethod,
        args: Option<&RequestArgs>,
    ) -> Result<HttpResponse, ClientError> {
        if !has_http_scheme(url) {
            return Err(ClientError::InvalidScheme);
        }
        match method {
            HttpMethod::Post => self.post(url, args),
            HttpMethod::Get => self.get(url, args),
        }
    }

    /// GET `url`. When `args` is given it is encoded into the query string
    /// ahead of the URL's own query.
    pub fn get(&self, url: &str, args: Option<&RequestArgs>) -> Result<HttpResponse, ClientError> {
        let parsed = ParsedUrl::parse(url)?;
        let target = parsed.request_target(args, self.config.arg_encoding);
        log::debug!("GET {}:{} {target}", parsed.host, parsed.port);

        let request = HttpRequest::get(&parsed.host, &target);
        self.send(&parsed, &request)
    }

    /// POST `args` as a form-encoded body to `url`. The URL's own query is
    /// kept on the request line.
    pub fn post(&self, url: &str, args: Option<&RequestArgs>) -> Result<HttpResponse, ClientError> {
        let parsed = ParsedUrl::parse(url)?;
        let target = parsed.request_target(None, self.config.arg_encoding);
        let body = args
            .map(|args| args.encode(self.config.arg_encoding))
            .unwrap_or_default();
        log::debug!("POST {}:{} {target} ({} body bytes)", parsed.host, parsed.port, body.len());

        let request = HttpRequest::post(&parsed.host, &target, body);
        self.send(&parsed, &request)
    }

    fn send(&self, parsed: &ParsedUrl, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let raw = self
            .transport
            .round_trip(&parsed.host, parsed.port, &request.to_bytes())?;
        let response = HttpResponse::from_raw(raw)?;
        log::debug!("response status {}", response.code());
        Ok(response)
    }
}
