//! DonationAlerts 인증 어댑터 전역 에러 시스템
//!
//! OAuth 2.0 플로우의 각 단계(URL 생성, 토큰 교환, 사용자 정보 조회, 매핑)에서
//! 발생할 수 있는 실패를 하나의 열거형으로 표현합니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 어댑터는 에러를 로그로 남기거나 삼키지 않습니다. 모든 실패는 호출자에게
//! 그대로 전파되며, 호출자는 "프로바이더가 잘못 응답함"과 "네트워크 장애"를
//! 변형(variant)으로 구분할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use donationalerts_auth::errors::AuthError;
//!
//! match service.user_from_token(&token).await {
//!     Ok(user) => println!("로그인: {:?}", user.nickname),
//!     Err(AuthError::Network(e)) => log::warn!("네트워크 장애: {}", e),
//!     Err(AuthError::Protocol(msg)) => log::error!("프로바이더 응답 오류: {}", msg),
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

/// 어댑터 전역 에러 타입
#[derive(Error, Debug)]
pub enum AuthError {
    /// 자격 증명/리다이렉트 URI 설정 오류 (500 Internal Server Error)
    ///
    /// 생성 시점에는 검증하지 않으며, 환경 변수 로더와
    /// `ClientCredentials::ensure_valid`에서만 발생합니다.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP 전송 계층 실패 (502 Bad Gateway)
    ///
    /// 원본 에러는 `source()`로 그대로 보존됩니다.
    #[error("Network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 2xx가 아닌 응답 상태 (502 Bad Gateway)
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// 응답 상태 코드
        status: u16,
        /// 응답 본문 (진단용)
        body: String,
    },

    /// 2xx 응답이지만 필수 필드가 없는 경우 (401 Unauthorized)
    ///
    /// `access_token`, `data`, `data.id` 누락 등 프로바이더의 프로토콜 위반입니다.
    /// 인증 실패로 취급되며 내부에서 재시도하지 않습니다.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// 응답 본문이 유효한 JSON이 아님 (502 Bad Gateway)
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// 콜백 state 불일치 (401 Unauthorized)
    #[error("Invalid OAuth state")]
    InvalidState,
}

impl AuthError {
    /// 임의의 전송 계층 에러를 `Network`로 감쌉니다.
    pub fn network<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AuthError::Network(Box::new(err))
    }

    /// 필수 필드 누락을 나타내는 `Protocol` 에러를 생성합니다.
    pub fn missing_field(field: &str) -> Self {
        AuthError::Protocol(format!("응답에 필수 필드 `{}`가 없습니다", field))
    }

    /// 호스트 애플리케이션이 응답할 HTTP 상태 코드를 반환합니다.
    ///
    /// 라이브러리는 웹 프레임워크에 의존하지 않으므로 숫자 코드만 제공합니다.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Protocol(_) | AuthError::InvalidState => 401,
            AuthError::Network(_) | AuthError::UnexpectedStatus { .. } | AuthError::Decode(_) => 502,
            AuthError::Configuration(_) => 500,
        }
    }

    /// 프로바이더 측 인증 실패인지 여부
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, AuthError::Protocol(_) | AuthError::InvalidState)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_protocol_error_status() {
        let error = AuthError::missing_field("access_token");

        assert_eq!(error.status_code(), 401);
        assert!(error.is_authentication_failure());
        assert!(error.to_string().contains("access_token"));
    }

    #[test]
    fn test_network_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let error = AuthError::network(io);

        assert_eq!(error.status_code(), 502);
        assert!(!error.is_authentication_failure());
        assert!(error.source().is_some());
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_unexpected_status_message() {
        let error = AuthError::UnexpectedStatus {
            status: 401,
            body: "{\"message\":\"Unauthenticated.\"}".to_string(),
        };

        assert_eq!(error.status_code(), 502);
        assert!(error.to_string().contains("401"));
    }

    #[test]
    fn test_decode_error_from_serde() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("<html>");
        let error: AuthError = result.unwrap_err().into();

        assert!(matches!(error, AuthError::Decode(_)));
    }

    #[test]
    fn test_configuration_error_status() {
        let error = AuthError::Configuration("DONATIONALERTS_CLIENT_ID must be set".to_string());

        assert_eq!(error.status_code(), 500);
    }
}
