//! Error types for the raw HTTP client.
//!
//! # Design
//! Connection failures get a dedicated variant carrying the target so the
//! caller can report which host/port was unreachable and decide whether to
//! exit. Failures after the socket is open land in `Io`; everything that goes
//! wrong while interpreting the received text is a parse variant.

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors returned by `HttpClient` and `Connection`.
#[derive(Debug)]
pub enum ClientError {
    /// The URL could not be parsed or has no host component.
    InvalidUrl(String),

    /// DNS resolution or the TCP connect failed.
    Connection {
        host: String,
        port: u16,
        source: io::Error,
    },

    /// Sending or receiving failed on an open connection.
    Io(io::Error),

    /// The response bytes are not valid UTF-8.
    Decode(FromUtf8Error),

    /// The response does not start with a usable status line.
    MalformedStatusLine(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            ClientError::Connection { host, port, source } => {
                write!(f, "could not connect to {host}:{port}: {source}")
            }
            ClientError::Io(err) => write!(f, "socket error: {err}"),
            ClientError::Decode(err) => write!(f, "response is not utf-8: {err}"),
            ClientError::MalformedStatusLine(line) => {
                write!(f, "malformed status line: {line:?}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Connection { source, .. } => Some(source),
            ClientError::Io(err) => Some(err),
            ClientError::Decode(err) => Some(err),
            ClientError::InvalidUrl(_) | ClientError::MalformedStatusLine(_) => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err)
    }
}

impl From<FromUtf8Error> for ClientError {
    fn from(err: FromUtf8Error) -> Self {
        ClientError::Decode(err)
    }
}
