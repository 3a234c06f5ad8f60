//! # 범용 OAuth 2.0 Authorization Code 클라이언트
//!
//! 프로바이더에 독립적인 OAuth 2.0 클라이언트입니다. 프로바이더별 차이는
//! [`ProviderConfig`] 값(엔드포인트, 스코프, 사용자 매핑 함수)으로만 표현하고,
//! 클라이언트는 이를 조합(composition)하여 사용합니다.
//!
//! ## 제공 기능
//!
//! | 기능 | 메서드 | HTTP |
//! |------|--------|------|
//! | 인가 URL 생성 | [`OAuth2Client::authorization_url`] | 없음 |
//! | 인가 코드 교환 | [`OAuth2Client::exchange_code`] | `POST token_url` |
//! | 리프레시 요청 | [`OAuth2Client::request_refresh`] | `POST token_url` |
//! | 보호 리소스 조회 | [`OAuth2Client::get_json`] | `GET` + Bearer |
//!
//! ## 토큰 요청 형식
//!
//! ```text
//! POST https://www.donationalerts.com/oauth/token
//! Content-Type: application/x-www-form-urlencoded
//! Accept: application/json
//!
//! grant_type=authorization_code&
//! client_id=YOUR_CLIENT_ID&
//! client_secret=YOUR_CLIENT_SECRET&
//! code=AUTHORIZATION_CODE&
//! redirect_uri=YOUR_REDIRECT_URI
//! ```
//!
//! 재시도와 타임아웃은 주입된 [`HttpClient`]의 설정을 따릅니다.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::models::{ClientCredentials, NormalizedUser, TokenResponse};
use crate::errors::{AuthError, AuthResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};

/// 프로바이더 사용자 정보 응답을 정규화하는 함수
pub type UserMapper = fn(&Map<String, Value>) -> AuthResult<NormalizedUser>;

/// 프로바이더를 기술하는 상수 값
///
/// 프로바이더 하나를 추가하려면 이 값 하나만 정의하면 됩니다.
#[derive(Debug, Clone, Copy)]
pub struct ProviderConfig {
    /// 로그용 프로바이더 이름
    pub name: &'static str,
    pub authorize_url: &'static str,
    pub token_url: &'static str,
    pub user_info_url: &'static str,
    /// 인가 요청 시 보내는 스코프, 토큰 응답에 `scope`가 없을 때의 기본값이기도 함
    pub scopes: &'static [&'static str],
    pub scope_separator: &'static str,
    pub map_user: UserMapper,
}

/// 리프레시 토큰 요청 훅
///
/// 네트워크 POST만 담당하고 원시 응답 객체를 돌려줍니다. 파싱은 호출자가 합니다.
/// 기본 구현은 [`OAuth2Client`]이며, 테스트나 특수한 전송이 필요하면
/// 이 트레잇을 구현한 값을 서비스에 주입해 교체할 수 있습니다.
#[async_trait]
pub trait RefreshTokenRequest: Send + Sync + std::fmt::Debug {
    async fn perform_refresh_request(&self, refresh_token: &str) -> AuthResult<Map<String, Value>>;
}

/// 범용 OAuth 2.0 클라이언트
///
/// 자격 증명과 프로바이더 설정은 생성 후 변경되지 않습니다.
/// HTTP 전송 계층만 [`OAuth2Client::set_http_client`]로 교체할 수 있습니다.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    credentials: ClientCredentials,
    provider: ProviderConfig,
    http: Arc<dyn HttpClient>,
}

impl OAuth2Client {
    /// 기본 reqwest 전송 계층으로 클라이언트를 생성합니다.
    pub fn new(credentials: ClientCredentials, provider: ProviderConfig) -> Self {
        Self::with_http_client(credentials, provider, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(
        credentials: ClientCredentials,
        provider: ProviderConfig,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            credentials,
            provider,
            http,
        }
    }

    pub fn set_http_client(&mut self, http: Arc<dyn HttpClient>) {
        self.http = http;
    }

    pub fn http_client(&self) -> &Arc<dyn HttpClient> {
        &self.http
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    /// 인가 URL의 쿼리 매개변수
    ///
    /// `client_id`, `redirect_uri`, `scope`, `response_type=code`, `state` 다섯 개이며
    /// 그 외의 값은 넣지 않습니다.
    pub fn code_fields(&self, state: &str) -> Vec<(&'static str, String)> {
        vec![
            ("client_id", self.credentials.client_id().to_string()),
            ("redirect_uri", self.credentials.redirect_uri().to_string()),
            ("scope", self.provider.scopes.join(self.provider.scope_separator)),
            ("response_type", "code".to_string()),
            ("state", state.to_string()),
        ]
    }

    /// 사용자를 리다이렉트할 인가 URL을 만듭니다.
    ///
    /// 모든 값은 퍼센트 인코딩됩니다. state와 리다이렉트 URI는 검증하지 않습니다.
    pub fn authorization_url(&self, state: &str) -> String {
        let query_string = self
            .code_fields(state)
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.provider.authorize_url, query_string)
    }

    pub fn token_url(&self) -> &'static str {
        self.provider.token_url
    }

    /// 인가 코드 교환 요청 본문
    pub fn token_fields(&self, code: &str) -> Vec<(String, String)> {
        vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("client_id".to_string(), self.credentials.client_id().to_string()),
            ("client_secret".to_string(), self.credentials.client_secret().to_string()),
            ("code".to_string(), code.to_string()),
            ("redirect_uri".to_string(), self.credentials.redirect_uri().to_string()),
        ]
    }

    /// 리프레시 토큰 교환 요청 본문
    pub fn refresh_fields(&self, refresh_token: &str) -> Vec<(String, String)> {
        vec![
            ("grant_type".to_string(), "refresh_token".to_string()),
            ("refresh_token".to_string(), refresh_token.to_string()),
            ("client_id".to_string(), self.credentials.client_id().to_string()),
            ("client_secret".to_string(), self.credentials.client_secret().to_string()),
        ]
    }

    /// Authorization Code를 Access Token으로 교환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse)` - 교환 성공
    /// * `Err(AuthError::UnexpectedStatus)` - 토큰 엔드포인트가 2xx 이외를 반환
    /// * `Err(AuthError::Protocol)` - 응답에 `access_token` 없음
    /// * `Err(AuthError::Network | AuthError::Decode)` - 전송/디코딩 실패
    pub async fn exchange_code(&self, code: &str) -> AuthResult<TokenResponse> {
        log::debug!("{} 인가 코드 교환 요청", self.provider.name);

        let raw = self.post_token_request(self.token_fields(code)).await?;
        self.parse_token_response(raw)
    }

    /// 리프레시 토큰으로 토큰 엔드포인트에 POST 하고 원시 응답을 돌려줍니다.
    pub async fn request_refresh(&self, refresh_token: &str) -> AuthResult<Map<String, Value>> {
        log::debug!("{} 액세스 토큰 갱신 요청", self.provider.name);

        self.post_token_request(self.refresh_fields(refresh_token)).await
    }

    /// 프로바이더 규칙(기본 스코프, 구분자)으로 토큰 응답을 파싱합니다.
    pub fn parse_token_response(&self, raw: Map<String, Value>) -> AuthResult<TokenResponse> {
        TokenResponse::from_raw(raw, self.provider.scopes, self.provider.scope_separator)
    }

    /// Bearer 토큰으로 보호된 JSON 리소스를 GET 합니다.
    ///
    /// 요청은 정확히 한 번 보내며 재시도하지 않습니다.
    pub async fn get_json(&self, url: &str, access_token: &str) -> AuthResult<Map<String, Value>> {
        let request = HttpRequest::get(url)
            .bearer_auth(access_token)
            .header("Accept", "application/json");

        let response = self.http.send(request).await?;
        decode_object(response)
    }

    /// 프로바이더 매핑 함수로 사용자 정보를 정규화합니다.
    pub fn map_user(&self, payload: &Map<String, Value>) -> AuthResult<NormalizedUser> {
        (self.provider.map_user)(payload)
    }

    async fn post_token_request(&self, form: Vec<(String, String)>) -> AuthResult<Map<String, Value>> {
        let request = HttpRequest::post_form(self.provider.token_url, form)
            .header("Accept", "application/json");

        let response = self.http.send(request).await?;
        decode_object(response)
    }
}

#[async_trait]
impl RefreshTokenRequest for OAuth2Client {
    async fn perform_refresh_request(&self, refresh_token: &str) -> AuthResult<Map<String, Value>> {
        self.request_refresh(refresh_token).await
    }
}

/// 2xx 응답 본문을 JSON 객체로 디코딩합니다.
fn decode_object(response: HttpResponse) -> AuthResult<Map<String, Value>> {
    if !response.is_success() {
        return Err(AuthError::UnexpectedStatus {
            status: response.status,
            body: response.body,
        });
    }

    match serde_json::from_str::<Value>(&response.body)? {
        Value::Object(map) => Ok(map),
        other => Err(AuthError::Protocol(format!(
            "JSON 객체 응답을 기대했지만 다른 값을 받았습니다: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, MockHttpClient};
    use serde_json::json;

    fn map_id_only(payload: &Map<String, Value>) -> AuthResult<NormalizedUser> {
        let id = payload
            .get("sub")
            .and_then(Value::as_i64)
            .ok_or_else(|| AuthError::missing_field("sub"))?;

        Ok(NormalizedUser {
            id,
            nickname: None,
            name: None,
            email: None,
            avatar: None,
            raw: payload.clone(),
        })
    }

    const EXAMPLE: ProviderConfig = ProviderConfig {
        name: "example",
        authorize_url: "https://id.example.com/authorize",
        token_url: "https://id.example.com/token",
        user_info_url: "https://id.example.com/me",
        scopes: &["profile", "email"],
        scope_separator: " ",
        map_user: map_id_only,
    };

    fn client(http: Arc<MockHttpClient>) -> OAuth2Client {
        OAuth2Client::with_http_client(
            ClientCredentials::new("client-id", "client-secret", "https://app.example.com/cb"),
            EXAMPLE,
            http,
        )
    }

    #[test]
    fn test_authorization_url_encodes_values() {
        let client = client(Arc::new(MockHttpClient::new()));

        let url = client.authorization_url("a b&c");
        assert_eq!(
            url,
            "https://id.example.com/authorize?client_id=client-id\
             &redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb\
             &scope=profile%20email&response_type=code&state=a%20b%26c"
        );
    }

    #[tokio::test]
    async fn test_exchange_code_posts_form() {
        let http = Arc::new(MockHttpClient::new().with_json(
            200,
            &json!({"access_token": "at", "expires_in": 3600, "scope": "profile"}),
        ));
        let client = client(http.clone());

        let token = client.exchange_code("auth-code").await.unwrap();
        assert_eq!(token.access_token, "at");
        assert_eq!(token.approved_scopes, vec!["profile"]);

        let history = http.history();
        assert_eq!(history.len(), 1);
        let request = &history[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://id.example.com/token");
        assert_eq!(request.header_value("Accept"), Some("application/json"));
        assert_eq!(request.form_value("grant_type"), Some("authorization_code"));
        assert_eq!(request.form_value("code"), Some("auth-code"));
        assert_eq!(request.form_value("client_id"), Some("client-id"));
        assert_eq!(request.form_value("client_secret"), Some("client-secret"));
        assert_eq!(request.form_value("redirect_uri"), Some("https://app.example.com/cb"));
    }

    #[tokio::test]
    async fn test_exchange_code_without_scope_uses_all_default_scopes() {
        let http = Arc::new(MockHttpClient::new().with_json(200, &json!({"access_token": "at"})));

        let token = client(http).exchange_code("auth-code").await.unwrap();
        assert_eq!(token.approved_scopes, vec!["profile", "email"]);
    }

    #[tokio::test]
    async fn test_exchange_code_error_status() {
        let http = Arc::new(MockHttpClient::new().with_json(400, &json!({"error": "invalid_grant"})));

        let result = client(http).exchange_code("expired").await;
        match result {
            Err(AuthError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_grant"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_refresh_returns_raw_map() {
        let http = Arc::new(MockHttpClient::new().with_json(200, &json!({"access_token": "new"})));
        let client = client(http.clone());

        let raw = client.perform_refresh_request("rt").await.unwrap();
        assert_eq!(raw.get("access_token"), Some(&json!("new")));

        let request = &http.history()[0];
        assert_eq!(request.form_value("grant_type"), Some("refresh_token"));
        assert_eq!(request.form_value("refresh_token"), Some("rt"));
    }

    #[tokio::test]
    async fn test_get_json_rejects_non_object() {
        let http = Arc::new(MockHttpClient::new().with_json(200, &json!([1, 2, 3])));

        let result = client(http).get_json("https://id.example.com/me", "at").await;
        assert!(matches!(result, Err(AuthError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let http = Arc::new(MockHttpClient::new().with_response(HttpResponse::new(200, "<html>")));

        let result = client(http).get_json("https://id.example.com/me", "at").await;
        assert!(matches!(result, Err(AuthError::Decode(_))));
    }

    #[test]
    fn test_map_user_uses_provider_mapper() {
        let client = client(Arc::new(MockHttpClient::new()));
        let payload = match json!({"sub": 7}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        assert_eq!(client.map_user(&payload).unwrap().id, 7);
    }

    #[test]
    fn test_set_http_client_replaces_transport() {
        let mut client = client(Arc::new(MockHttpClient::new()));
        let replacement: Arc<dyn HttpClient> = Arc::new(MockHttpClient::new());

        client.set_http_client(replacement.clone());
        assert!(Arc::ptr_eq(client.http_client(), &replacement));
    }
}
