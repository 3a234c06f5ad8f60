//! OAuth 로그인 시작 단계의 요청/응답 DTO
//!
//! OAuth 2.0 Authorization Code Grant 플로우의 첫 단계(브라우저 리다이렉트)에서
//! 사용되는 값들을 정의합니다.

use serde::{Deserialize, Serialize};

use crate::services::auth::state::generate_state;

/// 인가 요청 (일회성)
///
/// 호출자가 정한 CSRF 방지용 state 값을 담습니다. 값은 가공 없이
/// 리다이렉트 URL에 그대로 실립니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    pub state: String,
}

impl AuthorizationRequest {
    pub fn new(state: impl Into<String>) -> Self {
        Self { state: state.into() }
    }

    /// 새 랜덤 state로 요청을 생성합니다.
    pub fn generate() -> Self {
        Self::new(generate_state())
    }
}

/// OAuth 로그인 URL 응답
///
/// 클라이언트가 OAuth 로그인을 시작할 때 제공되는 응답입니다.
/// DonationAlerts 인증 페이지로의 리다이렉트 URL과 CSRF 방지용 state 값을 포함합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuthLoginUrlResponse {
    /// DonationAlerts 인증 페이지 URL
    ///
    /// 클라이언트가 브라우저를 리다이렉트할 전체 URL입니다.
    pub login_url: String,

    /// CSRF 방지용 state 파라미터
    ///
    /// 호출자는 이 값을 세션에 저장하고, 콜백에서 받은 state와 반드시 일치 확인해야 합니다.
    pub state: String,
}
