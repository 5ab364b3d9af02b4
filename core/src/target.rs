//! URL parsing into the pieces a request needs.

use url::{Host, Url};

use crate::error::ClientError;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Where a request goes: the parsed host, port and path of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host as it appears in the URL. IPv6 literals keep their brackets so
    /// the value can be sent as the `Host` header unchanged.
    pub host: String,
    pub port: u16,
    /// Never empty; `/` when the URL has no path.
    pub path: String,
    /// Query string without the leading `?`. Not sent with the request.
    pub query: Option<String>,
}

impl Target {
    /// Parse `input` into a target.
    ///
    /// The port defaults to 80 whatever the scheme is; no TLS is ever
    /// attempted.
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let url = Url::parse(input).map_err(|e| ClientError::InvalidUrl(format!("{input}: {e}")))?;

        let host = match url.host() {
            Some(Host::Ipv6(addr)) => format!("[{addr}]"),
            Some(host) => host.to_string(),
            None => return Err(ClientError::InvalidUrl(format!("{input}: missing host"))),
        };
        if host.is_empty() {
            return Err(ClientError::InvalidUrl(format!("{input}: missing host")));
        }

        // `Url::port` hides a port equal to the scheme default, so an
        // explicit `:443` on https has to be read back from the input.
        let port = url
            .port()
            .or_else(|| written_port(input))
            .unwrap_or(DEFAULT_PORT);

        if url.scheme() != "http" {
            log::warn!(
                "scheme {:?} is not supported, speaking plain HTTP to port {port}",
                url.scheme()
            );
        }

        let path = match url.path() {
            "" => "/".to_string(),
            p => p.to_string(),
        };

        Ok(Self {
            host,
            port,
            path,
            query: url.query().map(str::to_string),
        })
    }

    /// Host in the form accepted by `ToSocketAddrs` (IPv6 brackets removed).
    pub fn connect_host(&self) -> &str {
        self.host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host)
    }
}

/// Port as written in the authority of `input`, if any.
fn written_port(input: &str) -> Option<u16> {
    let (_, rest) = input.trim().split_once("://")?;
    let authority = rest.split(['/', '\\', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let port = match host_port.rsplit_once(']') {
        Some((_, after)) => after.strip_prefix(':')?,
        None => host_port.rsplit_once(':')?.1,
    };
    port.parse().ok()
}
