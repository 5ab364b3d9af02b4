//! Request building, response parsing, and the one-shot exchange.
//!
//! # Design
//! `HttpClient` holds no state. Each operation is split the same way: a
//! `build_*` method produces an `HttpRequest`, `parse_response` consumes the
//! raw response text, and only `execute` touches the network in between.
//! The build/parse halves are deterministic and tested without sockets.

use crate::connection::Connection;
use crate::error::ClientError;
use crate::http::{encode_form, HttpMethod, HttpRequest, HttpResponse, FORM_CONTENT_TYPE};
use crate::target::Target;

/// Separator between the header block and the body.
const HEADER_END: &str = "\r\n\r\n";

/// Synchronous HTTP/1.1 client speaking directly over a TCP socket.
#[derive(Debug, Clone, Default)]
pub struct HttpClient;

impl HttpClient {
    pub fn new() -> Self {
        Self
    }

    pub fn build_get(&self, target: &Target) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: target.path.clone(),
            headers: vec![
                header("Host", &target.host),
                header("Accept", "*/*"),
                header("Accept-Charset", "utf-8"),
                header("Connection", "close"),
            ],
            body: None,
        }
    }

    /// Build a POST whose body is `args` form-encoded. No args means an
    /// empty body with `Content-Length: 0`.
    pub fn build_post<K, V>(&self, target: &Target, args: &[(K, V)]) -> HttpRequest
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let content = encode_form(args);
        HttpRequest {
            method: HttpMethod::Post,
            path: target.path.clone(),
            headers: vec![
                header("Host", &target.host),
                header("Accept", "*/*"),
                header("Accept-Charset", "utf-8"),
                header("Content-Type", FORM_CONTENT_TYPE),
                header("Content-Length", &content.len().to_string()),
                header("Connection", "close"),
            ],
            body: Some(content),
        }
    }

    pub fn parse_response(&self, raw: &str) -> Result<HttpResponse, ClientError> {
        Ok(HttpResponse {
            status: parse_status_code(raw)?,
            body: parse_body(raw).to_string(),
        })
    }

    /// Run one exchange: connect, send `request`, read until the peer
    /// closes, close, then parse.
    pub fn execute(&self, target: &Target, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut conn = Connection::open(target.connect_host(), target.port)?;

        log::info!("{} request:\n{request}", request.method);
        conn.send_all(&request.to_wire())?;

        let raw = conn.receive_all()?;
        log::info!("response:\n{raw}");
        conn.close();

        self.parse_response(&raw)
    }

    /// GET `url`. `args` are accepted for symmetry with `post` but a GET
    /// carries no body, so they are not sent.
    pub fn get<K, V>(&self, url: &str, args: &[(K, V)]) -> Result<HttpResponse, ClientError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !args.is_empty() {
            log::warn!("ignoring {} argument(s) on GET {url}", args.len());
        }
        let target = Target::parse(url)?;
        let request = self.build_get(&target);
        self.execute(&target, &request)
    }

    /// POST `args` form-encoded to `url`.
    pub fn post<K, V>(&self, url: &str, args: &[(K, V)]) -> Result<HttpResponse, ClientError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let target = Target::parse(url)?;
        let request = self.build_post(&target, args);
        self.execute(&target, &request)
    }

    /// Dispatch on `command`: exactly `"POST"` posts, anything else gets.
    pub fn command<K, V>(&self, url: &str, command: &str, args: &[(K, V)]) -> Result<HttpResponse, ClientError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match HttpMethod::from_command(command) {
            HttpMethod::Post => self.post(url, args),
            HttpMethod::Get => self.get(url, args),
        }
    }
}

fn header(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

/// Status code from the status line: the second whitespace-separated token,
/// after a first token that names an HTTP version.
pub fn parse_status_code(raw: &str) -> Result<u16, ClientError> {
    let status_line = raw.lines().next().unwrap_or("");
    let malformed = || ClientError::MalformedStatusLine(status_line.to_string());

    let mut tokens = status_line.split_whitespace();
    match tokens.next() {
        Some(version) if version.starts_with("HTTP/") => {}
        _ => return Err(malformed()),
    }
    let code = tokens.next().ok_or_else(malformed)?;
    if code.len() != 3 {
        return Err(malformed());
    }
    match code.parse::<u16>() {
        Ok(status) if (100..=999).contains(&status) => Ok(status),
        _ => Err(malformed()),
    }
}

/// Everything after the first blank line, or `""` when there is none.
pub fn parse_body(raw: &str) -> &str {
    raw.split_once(HEADER_END).map(|(_, body)| body).unwrap_or("")
}
