use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;

use crate::error::AppResult;

use super::HttpClient;

pub(crate) fn run_async_test<T, F>(future: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

#[derive(Debug, Clone)]
pub(crate) struct SentRequest {
    pub(crate) url: String,
    pub(crate) body: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) version: reqwest::Version,
}

/// Answers every request with `200 OK` / `ok` and remembers what was sent.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingClient {
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

impl RecordingClient {
    pub(crate) fn requests(&self) -> Vec<SentRequest> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|sent| sent.url).collect()
    }

    pub(crate) fn bodies(&self) -> Vec<String> {
        self.requests().into_iter().map(|sent| sent.body).collect()
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default();
        let headers = request
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentRequest {
                url: request.url().to_string(),
                body,
                headers,
                version: request.version(),
            });
        }

        let mut response = http::Response::new("ok");
        response
            .headers_mut()
            .insert("x-recorded", HeaderValue::from_static("1"));
        Ok(reqwest::Response::from(response))
    }
}

/// Never answers within any reasonable test timeout.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StalledClient;

#[async_trait]
impl HttpClient for StalledClient {
    async fn execute(&self, _request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(reqwest::Response::from(http::Response::new("late")))
    }
}
