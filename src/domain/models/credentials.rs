//! OAuth 클라이언트 자격 증명

use serde::Deserialize;
use validator::Validate;

use crate::errors::{AuthError, AuthResult};
use crate::utils::string_utils::mask_secret;

/// DonationAlerts 애플리케이션 자격 증명
///
/// DonationAlerts 개발자 페이지(`https://www.donationalerts.com/application/clients`)에서
/// 발급받은 클라이언트 정보입니다. 생성 시점에 한 번 주어지고 이후 변경되지 않습니다.
///
/// 생성자는 값을 검증하지 않습니다. 리다이렉트 URI 형식 등은 호출자 책임이며,
/// 필요하면 [`ClientCredentials::ensure_valid`]를 명시적으로 호출합니다.
#[derive(Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ClientCredentials {
    #[validate(length(min = 1, message = "client_id는 필수입니다"))]
    client_id: String,

    #[validate(length(min = 1, message = "client_secret은 필수입니다"))]
    client_secret: String,

    #[validate(url(message = "redirect_uri는 절대 URL이어야 합니다"))]
    redirect_uri: String,
}

impl ClientCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// 토큰 엔드포인트 요청에만 사용됩니다. 로그에 남기지 마세요.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// 자격 증명을 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 모든 값이 채워져 있고 `redirect_uri`가 절대 URL인 경우
    /// * `Err(AuthError::Configuration)` - 검증 실패
    pub fn ensure_valid(&self) -> AuthResult<()> {
        Validate::validate(self).map_err(|e| AuthError::Configuration(e.to_string()))
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let credentials = ClientCredentials::new("client-id", "client-secret", "https://example.com/callback");

        assert_eq!(credentials.client_id(), "client-id");
        assert_eq!(credentials.client_secret(), "client-secret");
        assert_eq!(credentials.redirect_uri(), "https://example.com/callback");
    }

    #[test]
    fn test_valid_credentials() {
        let credentials = ClientCredentials::new("client-id", "client-secret", "https://example.com/callback");

        assert!(credentials.ensure_valid().is_ok());
    }

    #[test]
    fn test_relative_redirect_uri_is_rejected() {
        let credentials = ClientCredentials::new("client-id", "client-secret", "/callback");

        let result = credentials.ensure_valid();
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_empty_client_id_is_rejected() {
        let credentials = ClientCredentials::new("", "client-secret", "https://example.com/callback");

        assert!(credentials.ensure_valid().is_err());
    }

    #[test]
    fn test_debug_masks_secret() {
        let credentials = ClientCredentials::new("client-id", "super-secret-value", "https://example.com/callback");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("client-id"));
        assert!(!debug.contains("super-secret-value"));
    }
}
