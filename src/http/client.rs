//! HTTP 전송 추상화
//!
//! 어댑터는 네트워크를 직접 다루지 않고 [`HttpClient`] 트레잇 하나에만 의존합니다.
//! 실제 전송(reqwest), 테스트용 스크립트 전송, 녹화된 응답 재생 등
//! 어떤 구현이든 같은 인터페이스로 주입할 수 있습니다.

use async_trait::async_trait;

use crate::errors::AuthResult;

/// 어댑터가 사용하는 HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// 전송 계층에 넘기는 요청
///
/// `form`은 POST 요청에서 `application/x-www-form-urlencoded` 본문으로 인코딩됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            form: Vec::new(),
        }
    }

    pub fn post_form(url: impl Into<String>, form: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            form,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// `Authorization: Bearer <token>` 헤더를 추가합니다.
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// 헤더 값을 조회합니다. 이름은 대소문자를 구분하지 않습니다.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// 전송 계층이 돌려주는 응답 (상태 코드 + 본문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// JSON 값을 본문으로 하는 응답을 생성합니다.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 요청 하나를 수행하고 상태 코드와 본문을 돌려주는 전송 계층
///
/// 구현체는 여러 태스크에서 동시에 호출될 수 있으므로 `Send + Sync`여야 합니다.
/// 타임아웃, 프록시, 재시도 정책은 모두 구현체의 책임입니다.
///
/// 2xx가 아닌 응답도 `Ok(HttpResponse)`로 반환해야 합니다.
/// `Err`는 연결 실패 등 응답을 받지 못한 경우에만 사용합니다.
#[async_trait]
pub trait HttpClient: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: HttpRequest) -> AuthResult<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest::get("https://www.donationalerts.com/api/v1/user/oauth")
            .bearer_auth("test-token")
            .header("Accept", "application/json");

        assert_eq!(request.header_value("authorization"), Some("Bearer test-token"));
        assert_eq!(request.header_value("ACCEPT"), Some("application/json"));
        assert_eq!(request.header_value("Content-Type"), None);
    }

    #[test]
    fn test_form_lookup() {
        let request = HttpRequest::post_form(
            "https://www.donationalerts.com/oauth/token",
            vec![("grant_type".to_string(), "refresh_token".to_string())],
        );

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.form_value("grant_type"), Some("refresh_token"));
        assert_eq!(request.form_value("code"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
    }
}
