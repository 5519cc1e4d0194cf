//! One-shot TCP exchange: connect, write the request, read until the peer
//! closes, decode as UTF-8.
//!
//! # Design
//! A `Connection` is created per request and consumed by `exchange`, so the
//! socket is closed when the exchange returns, whatever the outcome. Nothing
//! about a connection is kept on the client between calls. There is no read
//! timeout; a peer that never closes blocks the caller.

use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;

use crate::config::DEFAULT_READ_CHUNK_SIZE;
use crate::error::ClientError;

/// Performs a single request/response exchange with `host:port`.
pub trait Transport {
    fn round_trip(&self, host: &str, port: u16, request: &[u8]) -> Result<String, ClientError>;
}

/// `Transport` over a fresh `TcpStream` per call.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    read_chunk_size: usize,
}

impl TcpTransport {
    pub fn new(read_chunk_size: usize) -> Self {
        Self {
            read_chunk_size: read_chunk_size.max(1),
        }
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_READ_CHUNK_SIZE)
    }
}

impl Transport for TcpTransport {
    fn round_trip(&self, host: &str, port: u16, request: &[u8]) -> Result<String, ClientError> {
        Connection::open(host, port)?.exchange(request, self.read_chunk_size)
    }
}

/// An open socket owned by exactly one exchange.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Resolve and connect. Any failure here, DNS included, is `Connect`.
    pub fn open(host: &str, port: u16) -> Result<Self, ClientError> {
        match TcpStream::connect((host, port)) {
            Ok(stream) => {
                log::debug!("connected to {host}:{port}");
                Ok(Self { stream })
            }
            Err(source) => {
                log::warn!("connect to {host}:{port} failed: {source}");
                Err(ClientError::Connect {
                    host: host.to_string(),
                    port,
                    source,
                })
            }
        }
    }

    /// Write all of `request`, then read until end-of-stream. The socket is
    /// dropped, and so closed, on return.
    pub fn exchange(mut self, request: &[u8], read_chunk_size: usize) -> Result<String, ClientError> {
        self.stream.write_all(request)?;
        self.stream.flush()?;
        log::debug!("sent {} request bytes", request.len());

        let raw = read_to_close(&mut self.stream, read_chunk_size)?;
        log::debug!("received {} response bytes", raw.len());

        Ok(String::from_utf8(raw)?)
    }
}

/// Accumulate reads until one returns zero bytes.
fn read_to_close(reader: &mut impl Read, chunk_size: usize) -> Result<Vec<u8>, ClientError> {
    let mut chunk = vec![0_u8; chunk_size.max(1)];
    let mut buffer = Vec::new();
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(buffer),
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
