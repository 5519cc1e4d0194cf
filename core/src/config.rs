//! Client configuration.

use std::env;

use crate::args::ArgEncoding;
use crate::error::ClientError;

pub const ARG_ENCODING_VAR: &str = "HTTPCLIENT_ARG_ENCODING";
pub const READ_CHUNK_VAR: &str = "HTTPCLIENT_READ_CHUNK";

pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Encoding for GET query args and POST form bodies.
    pub arg_encoding: ArgEncoding,
    /// Size of each socket read while draining the response.
    pub read_chunk_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            arg_encoding: ArgEncoding::Percent,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `HTTPCLIENT_ARG_ENCODING` (`percent` or `raw`)
    /// and `HTTPCLIENT_READ_CHUNK` (a positive integer).
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ARG_ENCODING_VAR) {
            config.arg_encoding = match value.trim().to_ascii_lowercase().as_str() {
                "percent" => ArgEncoding::Percent,
                "raw" => ArgEncoding::Raw,
                other => {
                    return Err(ClientError::InvalidConfig(format!(
                        "{ARG_ENCODING_VAR} must be `percent` or `raw`, got {other:?}"
                    )))
                }
            };
        }

        if let Some(value) = lookup(READ_CHUNK_VAR) {
            config.read_chunk_size = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ClientError::InvalidConfig(format!(
                        "{READ_CHUNK_VAR} must be a positive integer, got {value:?}"
                    )))
                }
            };
        }

        Ok(config)
    }
}
