use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{
    Body, Client, Method, Url, Version,
    header::{ACCEPT, CONTENT_LENGTH, HeaderName, HeaderValue, TRANSFER_ENCODING},
};
use tracing::debug;

use crate::config::RunConfig;
use crate::error::DispatchError;

use super::client::{HttpClient, build_client};
use super::request::Request;

/// Everything captured from one response, body fully drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub version: Version,
    pub status: u16,
    pub reason: Option<&'static str>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ResponseSummary {
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.reason {
            Some(reason) => format!("{:?} {} {}", self.version, self.status, reason),
            None => format!("{:?} {}", self.version, self.status),
        }
    }

    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub transcript: String,
    pub response: ResponseSummary,
}

/// The request as sent (after [`wire_form`]) followed by the full response.
struct Transcript<'ex> {
    request: &'ex Request,
    response: &'ex ResponseSummary,
}

impl fmt::Display for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request:")?;
        writeln!(f, "{}", self.request.to_display())?;
        writeln!(f, "Response:")?;
        writeln!(f, "{}", self.response.status_line())?;
        for (name, value) in &self.response.headers {
            writeln!(f, "{}: {}", name, value)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.response.body_text())
    }
}

/// Turns parsed requests into wire requests and captures their responses.
///
/// Holds no per-request state; each [`Dispatcher::send`] is independent.
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    client: C,
    use_tls: bool,
    timeout: Duration,
}

impl Dispatcher<Client> {
    /// Builds a dispatcher backed by a reqwest client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the proxy URL is invalid or the client cannot be built.
    pub fn from_config(config: &RunConfig) -> Result<Self, DispatchError> {
        Ok(Self::new(
            build_client(config)?,
            config.use_tls,
            config.timeout(),
        ))
    }
}

impl<C: HttpClient> Dispatcher<C> {
    #[must_use]
    pub const fn new(client: C, use_tls: bool, timeout: Duration) -> Self {
        Self {
            client,
            use_tls,
            timeout,
        }
    }

    const fn scheme(&self) -> &'static str {
        if self.use_tls { "https" } else { "http" }
    }

    /// Sends `request` and reads the whole response.
    ///
    /// The timeout bounds the full exchange, body included.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingHost`] without touching the network when
    /// the request has no Host header, a build error when method, URL or
    /// headers are not valid on the wire, and [`DispatchError::Timeout`],
    /// [`DispatchError::Transport`] or [`DispatchError::ReadBody`] for
    /// failures during the exchange.
    pub async fn send(&self, request: &Request) -> Result<Exchange, DispatchError> {
        let wire = wire_form(request);
        let outgoing = self.build(&wire)?;
        debug!(
            "Dispatching {} {} ({} body bytes)",
            outgoing.method(),
            outgoing.url(),
            wire.body.len()
        );

        let timeout = self.timeout;
        let exchange = async {
            let response = self
                .client
                .execute(outgoing)
                .await
                .map_err(|err| DispatchError::from_transport(err, timeout))?;
            read_response(response, timeout).await
        };
        let response = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_elapsed| DispatchError::Timeout { timeout })??;

        let transcript = Transcript {
            request: &wire,
            response: &response,
        }
        .to_string();
        Ok(Exchange {
            transcript,
            response,
        })
    }

    fn build(&self, wire: &Request) -> Result<reqwest::Request, DispatchError> {
        let host = wire.host().ok_or(DispatchError::MissingHost)?;
        let target = format!("{}://{}{}", self.scheme(), host, wire.path);
        let url = Url::parse(&target).map_err(|err| DispatchError::InvalidUrl {
            url: target.clone(),
            source: err,
        })?;
        let method =
            Method::from_bytes(wire.method.as_bytes()).map_err(|err| DispatchError::InvalidMethod {
                method: wire.method.clone(),
                source: err,
            })?;

        let mut outgoing = reqwest::Request::new(method, url);
        for (name, value) in &wire.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                DispatchError::InvalidHeaderName {
                    name: name.clone(),
                    source: err,
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| DispatchError::InvalidHeaderValue {
                    name: name.clone(),
                    source: err,
                })?;
            outgoing.headers_mut().insert(header_name, header_value);
        }
        if let Some(version) = wire_version(wire.protocol_major, wire.protocol_minor) {
            *outgoing.version_mut() = version;
        }
        *outgoing.body_mut() = Some(Body::from(wire.body.clone()));
        *outgoing.timeout_mut() = Some(self.timeout);
        Ok(outgoing)
    }
}

/// Copy of `request` carrying the framing headers that actually go on the wire.
///
/// The body is always sent with a known length, so captured Content-Length
/// and Transfer-Encoding values are replaced. reqwest adds `Accept: */*` when
/// the request has none; it is written out here so the transcript shows it.
fn wire_form(request: &Request) -> Request {
    let mut wire = request.clone();
    wire.remove_header_ignore_case(CONTENT_LENGTH.as_str());
    wire.remove_header_ignore_case(TRANSFER_ENCODING.as_str());
    if !wire
        .headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(ACCEPT.as_str()))
    {
        wire.set_header("Accept", "*/*");
    }
    wire.set_header("Content-Length", &wire.body.len().to_string());
    wire
}

/// HTTP/2 and later are negotiated by the client; forcing them onto an
/// HTTP/1 connection would fail the request.
const fn wire_version(major: u32, minor: u32) -> Option<Version> {
    match (major, minor) {
        (1, 0) => Some(Version::HTTP_10),
        (1, 1) => Some(Version::HTTP_11),
        _ => None,
    }
}

async fn read_response(
    response: reqwest::Response,
    timeout: Duration,
) -> Result<ResponseSummary, DispatchError> {
    let version = response.version();
    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let mut stream = response.bytes_stream();
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(|err| DispatchError::from_body(err, timeout))?;
        body.extend_from_slice(&bytes);
    }

    Ok(ResponseSummary {
        version,
        status: status.as_u16(),
        reason: status.canonical_reason(),
        headers,
        body,
    })
}
