//! # DonationAlerts OAuth 2.0 인증 서비스
//!
//! DonationAlerts 계정으로 로그인하기 위한 소셜 로그인 어댑터입니다.
//! 범용 [`OAuth2Client`]에 DonationAlerts 전용 [`ProviderConfig`]를 조합하여 구성합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌──────────┐              ┌──────────────┐                 ┌───────────────┐
//! │ 클라이언트 │              │    호스트     │                 │ DonationAlerts │
//! └──────────┘              └──────────────┘                 └───────────────┘
//!      │ 1. 로그인 요청              │                                  │
//!      ├───────────────────────────►│ 2. login_url() / state 저장       │
//!      │ 3. 302 authorize URL       │                                  │
//!      │◄───────────────────────────┤                                  │
//!      │ 4. 사용자 인증 ──────────────────────────────────────────────►│
//!      │ 5. callback?code=&state=   │                                  │
//!      ├───────────────────────────►│ 6. verify_state()                │
//!      │                            │ 7. POST /oauth/token ───────────►│
//!      │                            │◄──────────────── access_token ───┤
//!      │                            │ 8. GET /api/v1/user/oauth ──────►│
//!      │                            │◄─────────────── {"data": {...}} ─┤
//!      │                            │ 9. map_to_user()                 │
//! ```
//!
//! ## 사용자 정보 응답
//!
//! ```json
//! {
//!   "data": {
//!     "id": 1,
//!     "code": "nickname",
//!     "name": "Full Name",
//!     "email": "user@example.com",
//!     "avatar": "https://example.com/avatar.png"
//!   }
//! }
//! ```
//!
//! 어댑터는 어떤 상태도 저장하지 않습니다. 호출 사이에 공유되는 것은
//! 불변 자격 증명과 주입된 HTTP 클라이언트뿐이므로 동시 호출은 서로 독립적입니다.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::{AUTHORIZE_URL, DEFAULT_SCOPE, DonationAlertsConfig, TOKEN_URL, USER_INFO_URL};
use crate::domain::dto::{AuthorizationRequest, OAuthLoginUrlResponse};
use crate::domain::models::{
    AuthenticatedUser, ClientCredentials, NormalizedUser, RawUserPayload, TokenResponse,
};
use crate::errors::{AuthError, AuthResult};
use crate::http::HttpClient;
use crate::services::auth::oauth2_client::{OAuth2Client, ProviderConfig, RefreshTokenRequest};
use crate::services::auth::social_provider::SocialProvider;

/// DonationAlerts 프로바이더 설정
pub const DONATIONALERTS: ProviderConfig = ProviderConfig {
    name: "donationalerts",
    authorize_url: AUTHORIZE_URL,
    token_url: TOKEN_URL,
    user_info_url: USER_INFO_URL,
    scopes: &[DEFAULT_SCOPE],
    scope_separator: " ",
    map_user: map_donationalerts_user,
};

/// DonationAlerts 사용자 정보 응답을 정규화합니다.
///
/// `payload.data`를 꺼내 `id`, `code`(닉네임), `name`, `email`, `avatar`를 옮기고,
/// `raw`에는 `data` 객체 자체를 담습니다.
///
/// # 에러
///
/// * `AuthError::Protocol` - `data`가 없거나 객체가 아님, `data.id`가 없거나 정수가 아님
pub fn map_donationalerts_user(payload: &RawUserPayload) -> AuthResult<NormalizedUser> {
    let data = payload
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| AuthError::missing_field("data"))?;

    let id = match data.get("id") {
        None | Some(Value::Null) => return Err(AuthError::missing_field("data.id")),
        Some(value) => parse_user_id(value).ok_or_else(|| {
            AuthError::Protocol(format!("`data.id`가 정수가 아닙니다: {}", value))
        })?,
    };

    let text = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);

    Ok(NormalizedUser {
        id,
        nickname: text("code"),
        name: text("name"),
        email: text("email"),
        avatar: text("avatar"),
        raw: data.clone(),
    })
}

fn parse_user_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// DonationAlerts 소셜 로그인 서비스
///
/// # 사용 예제
///
/// ```rust,ignore
/// use donationalerts_auth::services::auth::DonationAlertsAuthService;
///
/// let service = DonationAlertsAuthService::from_env()?;
///
/// // 1. 로그인 시작
/// let login = service.login_url(None);
/// session.insert("oauth_state", &login.state);
///
/// // 2. 콜백
/// verify_state(&session_state, &query.state)?;
/// let authenticated = service.user_from_code(&query.code).await?;
/// log::info!("DonationAlerts 사용자 로그인: {}", authenticated.user.id);
/// ```
#[derive(Debug, Clone)]
pub struct DonationAlertsAuthService {
    client: OAuth2Client,

    /// 리프레시 요청 훅
    ///
    /// `None`이면 `client`가 토큰 엔드포인트로 직접 요청합니다.
    refresh_hook: Option<Arc<dyn RefreshTokenRequest>>,
}

impl DonationAlertsAuthService {
    /// 자격 증명으로 서비스를 생성합니다.
    ///
    /// 자격 증명은 여기서 검증하지 않습니다. 필요하면 먼저
    /// `ClientCredentials::ensure_valid`를 호출하세요.
    pub fn new(credentials: ClientCredentials) -> Self {
        Self {
            client: OAuth2Client::new(credentials, DONATIONALERTS),
            refresh_hook: None,
        }
    }

    /// 환경 변수(`DONATIONALERTS_*`)의 자격 증명으로 서비스를 생성합니다.
    pub fn from_env() -> AuthResult<Self> {
        Ok(Self::new(DonationAlertsConfig::credentials()?))
    }

    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.client.set_http_client(http);
        self
    }

    /// HTTP 전송 계층을 교체합니다.
    pub fn set_http_client(&mut self, http: Arc<dyn HttpClient>) {
        self.client.set_http_client(http);
    }

    /// 리프레시 요청 훅을 교체합니다. 응답 파싱 규칙은 바뀌지 않습니다.
    pub fn with_refresh_hook(mut self, hook: Arc<dyn RefreshTokenRequest>) -> Self {
        self.refresh_hook = Some(hook);
        self
    }

    pub fn client(&self) -> &OAuth2Client {
        &self.client
    }

    pub fn credentials(&self) -> &ClientCredentials {
        self.client.credentials()
    }

    /// DonationAlerts 인가 URL을 생성합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://www.donationalerts.com/oauth/authorize?
    ///   client_id=YOUR_CLIENT_ID&
    ///   redirect_uri=https%3A%2F%2Fyourapp.com%2Fcallback&
    ///   scope=oauth-user-show&
    ///   response_type=code&
    ///   state=CSRF_PROTECTION_VALUE
    /// ```
    ///
    /// state는 검증하지 않으며 그대로 인코딩되어 실립니다.
    pub fn build_authorization_url(&self, state: &str) -> String {
        self.client.authorization_url(state)
    }

    /// 로그인 URL과 state를 함께 반환합니다.
    ///
    /// `state`가 `None`이면 새 값을 생성합니다. 호출자는 반환된 state를
    /// 세션에 저장했다가 콜백에서 `verify_state`로 비교해야 합니다.
    pub fn login_url(&self, state: Option<String>) -> OAuthLoginUrlResponse {
        let request = match state {
            Some(state) => AuthorizationRequest::new(state),
            None => AuthorizationRequest::generate(),
        };

        OAuthLoginUrlResponse {
            login_url: self.build_authorization_url(&request.state),
            state: request.state,
        }
    }

    pub fn token_url(&self) -> &'static str {
        self.client.token_url()
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
    ///
    /// 네트워크 요청은 [`Self::perform_refresh_request`]에 위임하고,
    /// 돌아온 원시 응답만 여기서 파싱합니다. 응답에 `scope`가 없으면
    /// `["oauth-user-show"]`가 승인된 것으로 봅니다.
    ///
    /// # 에러
    ///
    /// * `AuthError::Protocol` - 응답에 `access_token` 없음 (재시도하지 않음)
    /// * 그 외 훅이 돌려준 에러는 그대로 전파
    pub async fn refresh_access_token(&self, refresh_token: &str) -> AuthResult<TokenResponse> {
        let raw = self.perform_refresh_request(refresh_token).await?;
        self.client.parse_token_response(raw)
    }

    /// 토큰 엔드포인트에 `grant_type=refresh_token`으로 POST 합니다.
    ///
    /// 리프레시 훅이 주입되어 있으면 그 훅을 사용합니다.
    pub async fn perform_refresh_request(&self, refresh_token: &str) -> AuthResult<Map<String, Value>> {
        match &self.refresh_hook {
            Some(hook) => hook.perform_refresh_request(refresh_token).await,
            None => self.client.perform_refresh_request(refresh_token).await,
        }
    }

    /// 액세스 토큰으로 사용자 정보를 조회합니다.
    ///
    /// ```text
    /// GET https://www.donationalerts.com/api/v1/user/oauth
    /// Authorization: Bearer ACCESS_TOKEN
    /// Accept: application/json
    /// ```
    ///
    /// 응답 본문은 가공 없이 반환됩니다.
    pub async fn fetch_user(&self, access_token: &str) -> AuthResult<RawUserPayload> {
        log::debug!("DonationAlerts 사용자 정보 요청");

        self.client
            .get_json(self.client.provider().user_info_url, access_token)
            .await
    }

    /// 사용자 정보 응답을 [`NormalizedUser`]로 변환합니다. I/O가 없는 순수 함수입니다.
    pub fn map_to_user(&self, payload: &RawUserPayload) -> AuthResult<NormalizedUser> {
        self.client.map_user(payload)
    }

    /// Authorization Code를 토큰으로 교환합니다.
    pub async fn exchange_code(&self, code: &str) -> AuthResult<TokenResponse> {
        self.client.exchange_code(code).await
    }

    pub async fn user_from_token(&self, access_token: &str) -> AuthResult<NormalizedUser> {
        let payload = self.fetch_user(access_token).await?;
        self.map_to_user(&payload)
    }

    /// 콜백의 Authorization Code로 로그인 플로우 전체를 수행합니다.
    ///
    /// 코드 교환, 사용자 정보 조회, 매핑 순서로 진행하며
    /// 어느 단계에서든 실패하면 즉시 에러를 반환합니다.
    ///
    /// state 검증은 이 메서드를 호출하기 전에 끝나 있어야 합니다.
    pub async fn user_from_code(&self, code: &str) -> AuthResult<AuthenticatedUser> {
        let token = self.exchange_code(code).await?;
        let user = self.user_from_token(&token.access_token).await?;

        log::info!("DonationAlerts 사용자 인증 완료: {}", user.id);

        Ok(AuthenticatedUser { user, token })
    }
}

#[async_trait]
impl SocialProvider for DonationAlertsAuthService {
    fn name(&self) -> &'static str {
        self.client.provider().name
    }

    fn auth_url(&self, state: &str) -> String {
        self.build_authorization_url(state)
    }

    fn token_url(&self) -> &'static str {
        DonationAlertsAuthService::token_url(self)
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> AuthResult<TokenResponse> {
        DonationAlertsAuthService::refresh_access_token(self, refresh_token).await
    }

    async fn user_by_token(&self, access_token: &str) -> AuthResult<RawUserPayload> {
        self.fetch_user(access_token).await
    }

    fn map_user_to_object(&self, payload: &RawUserPayload) -> AuthResult<NormalizedUser> {
        self.map_to_user(payload)
    }
}
