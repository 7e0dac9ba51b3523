/*
[INPUT]:  PendingRequest
[OUTPUT]: Raw status code and body bytes
[POS]:    HTTP layer - pluggable transport seam (reqwest by default)
[UPDATE]: When changing connection options or adding transports
*/

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};

use crate::http::{PendingRequest, Result};

/// Status and fully-read body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Sends a built request and reads the whole response
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: &PendingRequest) -> Result<RawResponse>;
}

/// Transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().build()?;
        Ok(Self { http_client })
    }

    /// Reuse an existing reqwest client (proxies, TLS roots, ...)
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PendingRequest) -> Result<RawResponse> {
        let mut builder = self
            .http_client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// Canned transport that sleeps before answering and counts calls
    #[derive(Debug)]
    pub(crate) struct MockTransport {
        delay: Duration,
        status: StatusCode,
        body: Bytes,
        calls: AtomicUsize,
        last: Mutex<Option<PendingRequest>>,
    }

    impl MockTransport {
        pub(crate) fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                delay: Duration::ZERO,
                status,
                body: Bytes::from_static(body.as_bytes()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            }
        }

        pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_request(&self) -> Option<PendingRequest> {
            self.last.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: &PendingRequest) -> Result<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            tokio::time::sleep(self.delay).await;
            Ok(RawResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }
}
