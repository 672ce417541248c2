//! reqwest-backed implementation of [`AnalysisApi`]

use std::time::Duration;

use bugwise_core::prelude::*;
use bugwise_core::{Analysis, HistoryEntry};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{AnalysisApi, HealthStatus, SubmitRequest};
use crate::error::SubmitError;

/// Submission endpoint, relative to the base URL
pub const ANALYZE_PATH: &str = "analyze-bug";
/// History listing endpoint, relative to the base URL
pub const HISTORY_PATH: &str = "bugs";
/// Health endpoint, relative to the base URL
pub const HEALTH_PATH: &str = "health";

/// Connection settings for [`HttpAnalysisClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all endpoints hang off, e.g. `http://127.0.0.1:5000/api`
    pub base_url: String,
    /// Whole-request timeout. `None` leaves reqwest's defaults in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the analysis service
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Build a client, validating the base URL up front.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        debug!("Analysis client targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// History listing with the failure kept, for callers that want to know.
    pub async fn try_fetch_history(&self) -> std::result::Result<Vec<HistoryEntry>, SubmitError> {
        send_json(self.client.get(self.endpoint(HISTORY_PATH))).await
    }
}

impl AnalysisApi for HttpAnalysisClient {
    async fn submit(&self, request: SubmitRequest) -> std::result::Result<Analysis, SubmitError> {
        debug!(
            "POST {} ({} chars, language={:?})",
            ANALYZE_PATH,
            request.bug_text.chars().count(),
            request.language
        );
        send_json(self.client.post(self.endpoint(ANALYZE_PATH)).json(&request)).await
    }

    async fn fetch_history(&self) -> Vec<HistoryEntry> {
        match self.try_fetch_history().await {
            Ok(entries) => {
                debug!("Fetched {} history entries", entries.len());
                entries
            }
            Err(e) => {
                warn!("History load failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn health(&self) -> std::result::Result<HealthStatus, SubmitError> {
        send_json(self.client.get(self.endpoint(HEALTH_PATH))).await
    }
}

/// Send a request and decode a 2xx JSON body.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> std::result::Result<T, SubmitError> {
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::http(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| SubmitError::network(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| SubmitError::malformed(e.to_string()))
}

/// Validate an absolute http(s) base URL and strip trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| Error::invalid_base_url(trimmed, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::invalid_base_url(
                trimmed,
                format!("unsupported scheme '{other}'"),
            ))
        }
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::invalid_base_url(
            trimmed,
            "query strings and fragments are not allowed",
        ));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// One-shot HTTP stub: accepts a single connection, captures the raw
    /// request, answers with `status` and `body`.
    async fn stub_server(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{}/api", addr), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client_for(base: &str) -> HttpAnalysisClient {
        HttpAnalysisClient::new(ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:5000/api/").unwrap(),
            "http://localhost:5000/api"
        );
        assert_eq!(
            normalize_base_url("  https://bugs.example.com  ").unwrap(),
            "https://bugs.example.com"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_urls() {
        assert!(normalize_base_url("/api").is_err());
        assert!(normalize_base_url("ftp://example.com/api").is_err());
        assert!(normalize_base_url("http://example.com/api?x=1").is_err());
    }

    #[test]
    fn test_endpoint_join() {
        let client = client_for("http://localhost:5000/api/");
        assert_eq!(
            client.endpoint(ANALYZE_PATH),
            "http://localhost:5000/api/analyze-bug"
        );
        assert_eq!(client.endpoint(HISTORY_PATH), "http://localhost:5000/api/bugs");
    }

    #[tokio::test]
    async fn test_submit_posts_json_and_parses_analysis() {
        let (base, server) = stub_server(
            200,
            r#"{"explanation":"e","root_cause":"r","fix_steps":["one","two"],"example_code":"c","extra":1}"#,
        )
        .await;
        let client = client_for(&base);

        let analysis = client
            .submit(SubmitRequest::new("segfault on exit", None))
            .await
            .unwrap();
        assert_eq!(analysis.fix_steps, vec!["one", "two"]);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/analyze-bug HTTP/1.1"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"bug_text": "segfault on exit", "language": null})
        );
    }

    #[tokio::test]
    async fn test_submit_http_500_is_http_error() {
        let (base, _server) = stub_server(500, r#"{"error":"Analysis failed"}"#).await;
        let err = client_for(&base)
            .submit(SubmitRequest::new("x", None))
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::http(500));
        assert_eq!(err.kind(), bugwise_core::ErrorKind::RequestFailed);
    }

    #[tokio::test]
    async fn test_submit_unparseable_body_is_malformed() {
        let (base, _server) = stub_server(200, "<html>oops</html>").await;
        let err = client_for(&base)
            .submit(SubmitRequest::new("x", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), bugwise_core::ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_submit_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{}/api", addr))
            .submit(SubmitRequest::new("x", None))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Network { .. }));
    }

    #[tokio::test]
    async fn test_fetch_history_preserves_server_order() {
        let (base, server) = stub_server(
            200,
            r#"[{"bug_text":"second","language":"go","explanation":"","root_cause":"","example_code":""},
                {"bug_text":"first","language":null,"explanation":"","root_cause":"","fix_steps":["a"],"example_code":""}]"#,
        )
        .await;

        let entries = client_for(&base).fetch_history().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bug_text, "second");
        assert_eq!(entries[1].bug_text, "first");
        assert!(entries[0].fix_steps.is_empty());

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/bugs HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_fetch_history_swallows_errors() {
        let (base, _server) = stub_server(503, "").await;
        let client = client_for(&base);
        assert!(client.fetch_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_try_fetch_history_reports_status() {
        let (base, _server) = stub_server(404, "").await;
        let err = client_for(&base).try_fetch_history().await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_health() {
        let (base, server) =
            stub_server(200, r#"{"status":"ok","message":"Bugwise backend is running"}"#).await;
        let health = client_for(&base).health().await.unwrap();
        assert!(health.is_ok());
        assert!(server.await.unwrap().starts_with("GET /api/health"));
    }
}
