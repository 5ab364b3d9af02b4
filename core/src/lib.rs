//! Minimal HTTP/1.1 client over a raw TCP socket.
//!
//! # Overview
//! Parses a URL, opens one blocking connection, writes a hand-formatted GET
//! or POST, reads until the peer closes, and splits the text into a status
//! code and a body. No pooling, TLS, redirects, or chunked decoding.
//!
//! # Design
//! - `HttpClient` is stateless; every call runs a full
//!   connect → send → receive → close cycle on a fresh `Connection`.
//! - Building and parsing are pure (`build_*`, `parse_*`) so the wire format
//!   is testable without sockets; only `Connection` does I/O.
//! - Failures are `ClientError` values. Nothing in this crate exits the
//!   process.

pub mod client;
pub mod connection;
pub mod error;
pub mod http;
pub mod target;

pub use client::{parse_body, parse_status_code, HttpClient};
pub use connection::Connection;
pub use error::ClientError;
pub use http::{encode_form, HttpMethod, HttpRequest, HttpResponse};
pub use target::Target;
