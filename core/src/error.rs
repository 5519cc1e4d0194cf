//! Error types for the HTTP client pipeline.
//!
//! # Design
//! A single enum covers every stage (URL resolution, transport, response
//! parsing, configuration). The first three variants are the conditions a
//! caller is expected to show to a user as a plain message; the rest mean the
//! exchange happened but produced something the client cannot interpret.

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors returned by `HttpClient` and the individual pipeline stages.
#[derive(Debug)]
pub enum ClientError {
    /// The URL does not start with `http://`.
    InvalidScheme,

    /// The URL has no host component.
    MissingHost,

    /// The port component is not a number in `0..=65535`.
    InvalidPort(String),

    /// The TCP connection to `host:port` could not be established.
    Connect {
        host: String,
        port: u16,
        source: io::Error,
    },

    /// Writing the request or reading the response failed after connecting.
    Io(io::Error),

    /// The response bytes are not valid UTF-8.
    Decode(FromUtf8Error),

    /// The response has no usable status line.
    Parse(String),

    /// A configuration value could not be understood.
    InvalidConfig(String),
}

impl ClientError {
    /// `true` for the failures that are reported to the caller as a message
    /// rather than treated as a broken exchange.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidScheme | ClientError::MissingHost | ClientError::Connect { .. }
        )
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidScheme => {
                write!(f, "Wrong URL Scheme. Please enter the URL again")
            }
            ClientError::MissingHost => {
                write!(f, "No host specified. Please enter the URL again")
            }
            ClientError::InvalidPort(port) => write!(f, "invalid port: {port:?}"),
            ClientError::Connect { .. } => {
                write!(f, "Failed to connect to host at specified port")
            }
            ClientError::Io(e) => write!(f, "connection error: {e}"),
            ClientError::Decode(e) => write!(f, "response is not valid UTF-8: {e}"),
            ClientError::Parse(msg) => write!(f, "malformed response: {msg}"),
            ClientError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Connect { source, .. } => Some(source),
            ClientError::Io(e) => Some(e),
            ClientError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(e: io::Error) -> Self {
        ClientError::Io(e)
    }
}

impl From<FromUtf8Error> for ClientError {
    fn from(e: FromUtf8Error) -> Self {
        ClientError::Decode(e)
    }
}
