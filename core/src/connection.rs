//! One blocking TCP connection, scoped to a single request/response.
//!
//! # Design
//! A `Connection` is an explicit handle: `open` creates it, `send_all` and
//! `receive_all` take it by reference, `close` consumes it. Nothing holds a
//! socket between calls, so each exchange gets a fresh connection and drops
//! it before the response is interpreted.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

use crate::error::ClientError;

/// Size of each read from the socket.
pub const READ_CHUNK_SIZE: usize = 1024;

/// An open TCP stream to one peer.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Resolve `host` and connect to it on `port`.
    pub fn open(host: &str, port: u16) -> Result<Self, ClientError> {
        let stream = TcpStream::connect((host, port)).map_err(|source| ClientError::Connection {
            host: host.to_string(),
            port,
            source,
        })?;
        log::info!("connected to {host}:{port}");
        Ok(Self { stream })
    }

    /// Write the whole buffer. A short write is an error, never retried.
    pub fn send_all(&mut self, data: &[u8]) -> Result<(), ClientError> {
        self.stream.write_all(data)?;
        self.stream.flush()?;
        log::debug!("sent {} bytes", data.len());
        Ok(())
    }

    /// Read until the peer closes its side, then decode the bytes as UTF-8.
    ///
    /// Blocks for as long as the peer keeps the connection open; the request
    /// must carry `Connection: close` for this to terminate.
    pub fn receive_all(&mut self) -> Result<String, ClientError> {
        read_to_close(&mut self.stream)
    }

    /// Shut the socket down and release it.
    pub fn close(self) {
        // The peer has usually closed already; shutdown then reports
        // NotConnected on some platforms.
        if let Err(err) = self.stream.shutdown(Shutdown::Both) {
            if err.kind() != io::ErrorKind::NotConnected {
                log::debug!("shutdown failed: {err}");
            }
        }
    }
}

/// Drain `reader` in `READ_CHUNK_SIZE` reads until one returns zero bytes.
pub fn read_to_close<R: Read>(reader: &mut R) -> Result<String, ClientError> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
    log::debug!("received {} bytes", buffer.len());
    Ok(String::from_utf8(buffer)?)
}
