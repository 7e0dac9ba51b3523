/*
[INPUT]:  PendingRequest, deadline, transport and observer
[OUTPUT]: Body bytes of a 200 response, or a classified error
[POS]:    HTTP layer - deadline-bounded request execution
[UPDATE]: When changing timeout handling or request dumping
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::http::{FybError, PendingRequest, RawResponse, Result, Transport};

/// Hook notified around every request; must not influence the outcome.
pub trait RequestObserver: Send + Sync + fmt::Debug {
    fn on_request(&self, _request: &PendingRequest) {}

    fn on_response(&self, _request: &PendingRequest, _response: &RawResponse) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {}

/// Dumps requests and responses at debug level, with credentials masked
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, request: &PendingRequest) {
        debug!(
            method = %request.method,
            url = %request.url,
            headers = %redact_headers(&request.headers),
            body = %request.body,
            "dump request"
        );
    }

    fn on_response(&self, request: &PendingRequest, response: &RawResponse) {
        debug!(
            url = %request.url,
            status = %response.status,
            body = %String::from_utf8_lossy(&response.body),
            "dump response"
        );
    }
}

fn redact_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = match name.as_str() {
                "key" | "sig" => {
                    let raw = value.to_str().unwrap_or_default();
                    format!("{}***", raw.get(..4).unwrap_or_default())
                }
                _ => value.to_str().unwrap_or("<binary>").to_string(),
            };
            format!("{name}: {shown}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs requests against a transport under a hard deadline.
///
/// The transport future is dropped when the deadline fires, which cancels the
/// in-flight call. A transport finishing exactly at the deadline still wins,
/// because it is polled before the timer.
#[derive(Debug, Clone)]
pub struct TimedExecutor {
    transport: Arc<dyn Transport>,
    observer: Arc<dyn RequestObserver>,
}

impl TimedExecutor {
    pub fn new(transport: Arc<dyn Transport>, observer: Arc<dyn RequestObserver>) -> Self {
        Self {
            transport,
            observer,
        }
    }

    /// Execute `request`, giving up after `timeout`.
    ///
    /// Non-200 responses fail with [`FybError::Status`], which keeps the body.
    pub async fn execute(&self, request: &PendingRequest, timeout: Duration) -> Result<Bytes> {
        self.observer.on_request(request);
        let started = Instant::now();

        let response = match time::timeout(timeout, self.transport.send(request)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    method = %request.method,
                    url = %request.url,
                    timeout = ?timeout,
                    "FYB request timed out"
                );
                return Err(FybError::Timeout { duration: timeout });
            }
        };

        self.observer.on_response(request, &response);
        debug!(
            method = %request.method,
            url = %request.url,
            status = %response.status,
            elapsed = ?started.elapsed(),
            "FYB request completed"
        );

        if response.status != StatusCode::OK {
            warn!(url = %request.url, status = %response.status, "FYB returned non-200 status");
            return Err(FybError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::{FixedClock, Form, RequestBuilder};
    use crate::http::transport::mock::MockTransport;
    use reqwest::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingObserver {
        requests: AtomicUsize,
        responses: AtomicUsize,
    }

    impl RequestObserver for CountingObserver {
        fn on_request(&self, _request: &PendingRequest) {
            self.requests.fetch_add(1, Ordering::SeqCst);
        }

        fn on_response(&self, _request: &PendingRequest, _response: &RawResponse) {
            self.responses.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn request() -> PendingRequest {
        RequestBuilder::new(
            "https://fybsg.com/api/SGD",
            "my-api-key",
            "secret",
            Arc::new(FixedClock(1_700_000_000)),
        )
        .unwrap()
        .build(Method::POST, "test", Form::new(), true)
        .unwrap()
    }

    fn executor(transport: MockTransport) -> (TimedExecutor, Arc<MockTransport>) {
        let transport = Arc::new(transport);
        let executor = TimedExecutor::new(transport.clone(), Arc::new(NoopObserver));
        (executor, transport)
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_faster_than_deadline() {
        let (executor, transport) = executor(
            MockTransport::new(StatusCode::OK, r#"{"error":0,"msg":"success"}"#)
                .with_delay(Duration::from_millis(100)),
        );

        let body = executor
            .execute(&request(), Duration::from_millis(500))
            .await
            .unwrap();

        assert_eq!(&body[..], br#"{"error":0,"msg":"success"}"#);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_faster_than_transport() {
        let (executor, _) = executor(
            MockTransport::new(StatusCode::OK, "{}").with_delay(Duration::from_secs(5)),
        );
        let started = Instant::now();

        let err = executor
            .execute(&request(), Duration::from_millis(500))
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_finishing_at_deadline_wins() {
        let (executor, _) = executor(
            MockTransport::new(StatusCode::OK, "{}").with_delay(Duration::from_millis(500)),
        );

        let result = executor
            .execute(&request(), Duration::from_millis(500))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_200_keeps_body() {
        let (executor, _) = executor(MockTransport::new(
            StatusCode::FORBIDDEN,
            r#"{"error":"invalid key"}"#,
        ));

        let err = executor
            .execute(&request(), Duration::from_secs(1))
            .await
            .unwrap_err();

        match err {
            FybError::Status { status, body } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(&body[..], br#"{"error":"invalid key"}"#);
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_body_on_success() {
        let (executor, _) = executor(MockTransport::new(StatusCode::OK, ""));
        let body = executor
            .execute(&request(), Duration::from_secs(1))
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_request_and_response() {
        let observer = Arc::new(CountingObserver::default());
        let executor = TimedExecutor::new(
            Arc::new(MockTransport::new(StatusCode::OK, "{}")),
            observer.clone(),
        );

        executor
            .execute(&request(), Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(observer.requests.load(Ordering::SeqCst), 1);
        assert_eq!(observer.responses.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_skips_response_on_timeout() {
        let observer = Arc::new(CountingObserver::default());
        let executor = TimedExecutor::new(
            Arc::new(MockTransport::new(StatusCode::OK, "{}").with_delay(Duration::from_secs(2))),
            observer.clone(),
        );

        let _ = executor.execute(&request(), Duration::from_millis(10)).await;

        assert_eq!(observer.requests.load(Ordering::SeqCst), 1);
        assert_eq!(observer.responses.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unbounded_deadline_is_accepted() {
        let (executor, _) = executor(MockTransport::new(StatusCode::OK, "{}"));
        let result = executor.execute(&request(), Duration::MAX).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_redact_headers_masks_credentials() {
        let rendered = redact_headers(&request().headers);
        assert!(rendered.contains("key: my-a***"));
        let signature = crate::http::signature::sign("timestamp=1700000000", "secret").unwrap();
        assert!(!rendered.contains(&signature));
        assert!(rendered.contains("accept: application/json"));
    }
}
