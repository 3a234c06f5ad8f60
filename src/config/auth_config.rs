//! # Authentication Configuration Module
//!
//! DonationAlerts OAuth 2.0 엔드포인트 상수와 클라이언트 자격 증명을
//! 환경 변수에서 읽어 오는 설정을 관리합니다.
//!
//! 엔드포인트 URL과 기본 스코프는 프로바이더가 고정한 값이므로 설정할 수 없습니다.
//! 설정 가능한 것은 자격 증명 세 가지뿐입니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export DONATIONALERTS_CLIENT_ID="12345"
//! export DONATIONALERTS_CLIENT_SECRET="your-client-secret"
//! export DONATIONALERTS_REDIRECT_URI="https://yourapp.com/auth/donationalerts/callback"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use donationalerts_auth::config::DonationAlertsConfig;
//!
//! let credentials = DonationAlertsConfig::credentials()?;
//! let service = DonationAlertsAuthService::new(credentials);
//! ```

use std::env;

use crate::domain::models::credentials::ClientCredentials;
use crate::errors::{AuthError, AuthResult};
use crate::utils::string_utils::clean_optional_string;

/// DonationAlerts 호스트
pub const DONATIONALERTS_HOST: &str = "https://www.donationalerts.com";

/// 인가 엔드포인트 (브라우저 리다이렉트)
pub const AUTHORIZE_URL: &str = "https://www.donationalerts.com/oauth/authorize";

/// 토큰 교환/갱신 엔드포인트
pub const TOKEN_URL: &str = "https://www.donationalerts.com/oauth/token";

/// 사용자 정보 엔드포인트
pub const USER_INFO_URL: &str = "https://www.donationalerts.com/api/v1/user/oauth";

/// 요청하는 유일한 스코프. 프로바이더가 `scope`를 생략하면 이 값이 승인된 것으로 본다.
pub const DEFAULT_SCOPE: &str = "oauth-user-show";

/// DonationAlerts OAuth 2.0 클라이언트 설정
///
/// DonationAlerts 애플리케이션 관리 페이지에서 생성한 OAuth 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct DonationAlertsConfig;

impl DonationAlertsConfig {
    pub const CLIENT_ID_VAR: &'static str = "DONATIONALERTS_CLIENT_ID";
    pub const CLIENT_SECRET_VAR: &'static str = "DONATIONALERTS_CLIENT_SECRET";
    pub const REDIRECT_URI_VAR: &'static str = "DONATIONALERTS_REDIRECT_URI";

    /// DonationAlerts OAuth Client ID를 반환합니다.
    ///
    /// # 에러
    ///
    /// `DONATIONALERTS_CLIENT_ID`가 없거나 비어 있으면 `AuthError::Configuration`
    pub fn client_id() -> AuthResult<String> {
        required(&env_lookup, Self::CLIENT_ID_VAR)
    }

    /// DonationAlerts OAuth Client Secret을 반환합니다.
    ///
    /// 이 값을 로그에 출력하지 마세요.
    pub fn client_secret() -> AuthResult<String> {
        required(&env_lookup, Self::CLIENT_SECRET_VAR)
    }

    /// OAuth 인증 완료 후 리디렉션될 URI를 반환합니다.
    ///
    /// DonationAlerts 애플리케이션 설정의 Redirect URI와 정확히 일치해야 합니다.
    pub fn redirect_uri() -> AuthResult<String> {
        required(&env_lookup, Self::REDIRECT_URI_VAR)
    }

    /// 환경 변수에서 검증된 자격 증명을 읽어 옵니다.
    pub fn credentials() -> AuthResult<ClientCredentials> {
        Self::credentials_from(env_lookup)
    }

    /// 임의의 키-값 조회 함수로부터 자격 증명을 만듭니다.
    ///
    /// 값은 앞뒤 공백이 제거되며, 만들어진 자격 증명은
    /// `ClientCredentials::ensure_valid`를 통과해야 합니다.
    pub fn credentials_from<F>(lookup: F) -> AuthResult<ClientCredentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = ClientCredentials::new(
            required(&lookup, Self::CLIENT_ID_VAR)?,
            required(&lookup, Self::CLIENT_SECRET_VAR)?,
            required(&lookup, Self::REDIRECT_URI_VAR)?,
        );
        credentials.ensure_valid()?;

        log::debug!(
            "DonationAlerts 자격 증명 로드됨: client_id={}, redirect_uri={}",
            credentials.client_id(),
            credentials.redirect_uri()
        );

        Ok(credentials)
    }
}

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn required<F>(lookup: &F, key: &str) -> AuthResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    clean_optional_string(lookup(key))
        .ok_or_else(|| AuthError::Configuration(format!("{} must be set", key)))
}
