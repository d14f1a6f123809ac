use async_trait::async_trait;
use reqwest::{Client, Proxy, Request, Response};
use tracing::{debug, error};

use crate::config::RunConfig;
use crate::error::DispatchError;

/// Transport the dispatcher sends wire requests through.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes one request and returns the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns the transport error reported by the underlying client.
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl HttpClient for Client {
    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        Client::execute(self, request).await
    }
}

/// Builds the reqwest client for a run: timeout, and either the configured
/// proxy or a direct connection without environment proxy discovery.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidProxy`] when the proxy URL cannot be
/// parsed and [`DispatchError::BuildClient`] when the client cannot be built.
pub fn build_client(config: &RunConfig) -> Result<Client, DispatchError> {
    let mut client_builder = Client::builder().timeout(config.timeout());

    client_builder = match config.proxy() {
        Some(proxy_url) => {
            let proxy = Proxy::all(proxy_url).map_err(|err| {
                error!("Invalid proxy URL '{}': {}", proxy_url, err);
                DispatchError::InvalidProxy {
                    url: proxy_url.to_owned(),
                    source: err,
                }
            })?;
            debug!("Routing requests through proxy {}", proxy_url);
            client_builder.proxy(proxy)
        }
        None => client_builder.no_proxy(),
    };

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        DispatchError::BuildClient { source: err }
    })
}
