//! URL decomposition for `http://host[:port][/path][?query][#fragment]`.
//!
//! # Design
//! Parsing is purely textual: no percent-decoding, no `.`/`..` normalization
//! and no case folding. `;params` on the last path segment are not part of
//! the path. The scheme check is deliberately separate from
//! parsing so the dispatcher can report a wrong scheme before anything else.

use serde::{Deserialize, Serialize};

use crate::args::{ArgEncoding, RequestArgs};
use crate::error::ClientError;

pub const HTTP_SCHEME_PREFIX: &str = "http://";
pub const DEFAULT_PORT: u16 = 80;

/// The parts of a URL the client needs to issue a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    /// Whether the URL starts with exactly `http://`.
    pub has_http_scheme: bool,
    pub host: String,
    pub port: u16,
    /// Never empty; `/` when the URL has no path.
    pub path: String,
    /// Raw query without the leading `?`, possibly empty.
    pub query: String,
}

/// `true` only when `url` starts with the literal, case-sensitive `http://`.
pub fn has_http_scheme(url: &str) -> bool {
    url.starts_with(HTTP_SCHEME_PREFIX)
}

impl ParsedUrl {
    /// Split `url` into host, port, path and query.
    ///
    /// Fails with `MissingHost` when there is no host and with `InvalidPort`
    /// when the port is not a number that fits in `u16`. A URL with another
    /// scheme still parses; callers check `has_http_scheme` themselves.
    pub fn parse(url: &str) -> Result<Self, ClientError> {
        let has_http_scheme = has_http_scheme(url);

        let without_fragment = url.split_once('#').map_or(url, |(before, _)| before);
        let rest = strip_scheme(without_fragment);

        let Some(after_slashes) = rest.strip_prefix("//") else {
            return Err(ClientError::MissingHost);
        };

        let authority_end = after_slashes.find(['/', '?']).unwrap_or(after_slashes.len());
        let (authority, path_and_query) = after_slashes.split_at(authority_end);
        let (host, port) = split_authority(authority)?;
        if host.is_empty() {
            return Err(ClientError::MissingHost);
        }
        let port = match port {
            None | Some("") => None,
            Some(p) => Some(parse_port(p)?),
        };

        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (strip_params(path), query),
            None => (strip_params(path_and_query), ""),
        };

        Ok(Self {
            has_http_scheme,
            host: host.to_string(),
            port: port.unwrap_or(DEFAULT_PORT),
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            query: query.to_string(),
        })
    }

    /// Build the query part of the request target, including the `?`.
    ///
    /// With `args` present (even empty) the result is `?` + encoded args +
    /// the URL's own query, joined with no separator. Without args the URL's
    /// query is used as is, and an empty query yields an empty string.
    pub fn query_string(&self, args: Option<&RequestArgs>, encoding: ArgEncoding) -> String {
        match args {
            Some(args) => format!("?{}{}", args.encode(encoding), self.query),
            None if !self.query.is_empty() => format!("?{}", self.query),
            None => String::new(),
        }
    }

    /// Path followed by `query_string`, as written on the request line.
    pub fn request_target(&self, args: Option<&RequestArgs>, encoding: ArgEncoding) -> String {
        format!("{}{}", self.path, self.query_string(args, encoding))
    }
}

/// Drop a leading `scheme:` if the text starts with a syntactically valid
/// scheme name.
fn strip_scheme(url: &str) -> &str {
    let Some((scheme, rest)) = url.split_once(':') else {
        return url;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        rest
    } else {
        url
    }
}

/// Split `[userinfo@]host[:port]` into host and raw port text. An
/// unbalanced `[` or `]` leaves the host undeterminable.
fn split_authority(authority: &str) -> Result<(&str, Option<&str>), ClientError> {
    if authority.contains('[') != authority.contains(']') {
        return Err(ClientError::MissingHost);
    }
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        let (host, after) = bracketed.split_once(']').ok_or(ClientError::MissingHost)?;
        return Ok((host, after.strip_prefix(':')));
    }
    Ok(match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    })
}

/// Drop `;params` from the last path segment.
fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(i) => &path[..last_segment + i],
        None => path,
    }
}

fn parse_port(port: &str) -> Result<u16, ClientError> {
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClientError::InvalidPort(port.to_string()));
    }
    port.parse().map_err(|_| ClientError::InvalidPort(port.to_string()))
}
