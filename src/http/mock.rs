//! 스크립트된 응답을 돌려주고 요청을 기록하는 전송 계층
//!
//! 단위 테스트와 호스트 애플리케이션의 통합 테스트에서 실제 네트워크 없이
//! 어댑터를 검증할 때 사용합니다.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::errors::{AuthError, AuthResult};
use crate::http::client::{HttpClient, HttpRequest, HttpResponse};

/// 큐에 넣은 순서대로 응답을 돌려주는 [`HttpClient`]
///
/// 모든 요청은 `history()`로 조회할 수 있게 기록됩니다.
/// 큐가 비어 있으면 `AuthError::Network`를 반환합니다.
///
/// ```rust,ignore
/// let http = Arc::new(MockHttpClient::new().with_json(200, &json!({"data": {"id": 10}})));
/// let service = DonationAlertsAuthService::new(credentials).with_http_client(http.clone());
///
/// service.fetch_user("test-token").await?;
/// assert_eq!(http.history().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockHttpClient {
    responses: Mutex<VecDeque<AuthResult<HttpResponse>>>,
    history: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: HttpResponse) -> Self {
        self.push_response(response);
        self
    }

    pub fn with_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.with_response(HttpResponse::json(status, body))
    }

    pub fn with_error(self, error: AuthError) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(error));
        self
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(response));
    }

    /// 지금까지 받은 요청 목록 (순서 보존)
    pub fn history(&self) -> Vec<HttpRequest> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> AuthResult<HttpResponse> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(AuthError::network(std::io::Error::new(
                    std::io::ErrorKind::NotConnected,
                    "MockHttpClient: 준비된 응답이 없습니다",
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_responses_are_returned_in_order() {
        let http = MockHttpClient::new()
            .with_json(200, &json!({"n": 1}))
            .with_response(HttpResponse::new(500, "boom"));

        let first = http.send(HttpRequest::get("https://a.test/1")).await.unwrap();
        let second = http.send(HttpRequest::get("https://a.test/2")).await.unwrap();

        assert_eq!(first.body, "{\"n\":1}");
        assert_eq!(second.status, 500);

        let urls: Vec<String> = http.history().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://a.test/1", "https://a.test/2"]);
    }

    #[tokio::test]
    async fn test_empty_queue_is_network_error() {
        let http = MockHttpClient::new();

        let result = http.send(HttpRequest::get("https://a.test")).await;
        assert!(matches!(result, Err(AuthError::Network(_))));
        assert_eq!(http.history().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let http = MockHttpClient::new().with_error(AuthError::network(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "timed out",
        )));

        let result = http.send(HttpRequest::get("https://a.test")).await;
        assert!(matches!(result, Err(AuthError::Network(_))));
    }
}
