//! OAuth 2.0 토큰 응답 모델
//!
//! 토큰 엔드포인트(`/oauth/token`)의 원시 JSON 응답을 정규화한 값입니다.
//! 인가 코드 교환과 리프레시 토큰 교환 모두 같은 규칙으로 파싱됩니다.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{AuthError, AuthResult};
use crate::utils::string_utils::split_scopes;

/// 정규화된 토큰 응답
///
/// ## 파싱 규칙
///
/// | 필드 | 원시 응답 키 | 누락 시 |
/// |------|-------------|---------|
/// | `access_token` | `access_token` | `AuthError::Protocol` |
/// | `refresh_token` | `refresh_token` | `None` |
/// | `expires_in_seconds` | `expires_in` | `None` |
/// | `approved_scopes` | `scope` (공백 분리) | 프로바이더 기본 스코프 |
/// | `token_type` | `token_type` | `None` |
///
/// `approved_scopes`는 절대 비어 있지 않습니다. 프로바이더가 `scope`를 생략하면
/// 요청한 기본 스코프(`oauth-user-show`)가 그대로 승인된 것으로 간주합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in_seconds: Option<i64>,
    pub approved_scopes: Vec<String>,
    pub token_type: Option<String>,
    /// 원시 응답 전체 (프로바이더 고유 필드 보존)
    #[serde(default)]
    pub raw: Map<String, Value>,
}

impl TokenResponse {
    /// 원시 토큰 응답을 파싱합니다.
    ///
    /// # 인자
    ///
    /// * `raw` - JSON 디코딩된 응답 객체
    /// * `default_scopes` - `scope` 필드가 없을 때 사용할 스코프 목록
    /// * `scope_separator` - 프로바이더의 스코프 구분자
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenResponse)` - 파싱 성공
    /// * `Err(AuthError::Protocol)` - `access_token`이 없거나 빈 문자열인 경우
    pub fn from_raw(
        raw: Map<String, Value>,
        default_scopes: &[&str],
        scope_separator: &str,
    ) -> AuthResult<Self> {
        let access_token = raw
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::missing_field("access_token"))?
            .to_string();

        let refresh_token = raw
            .get("refresh_token")
            .and_then(Value::as_str)
            .map(str::to_string);

        let expires_in_seconds = raw.get("expires_in").and_then(|value| match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });

        let mut approved_scopes = raw
            .get("scope")
            .and_then(Value::as_str)
            .map(|scope| split_scopes(scope, scope_separator))
            .unwrap_or_default();
        if approved_scopes.is_empty() {
            approved_scopes = default_scopes.iter().map(|s| s.to_string()).collect();
        }

        let token_type = raw
            .get("token_type")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            access_token,
            refresh_token,
            expires_in_seconds,
            approved_scopes,
            token_type,
            raw,
        })
    }

    /// 발급 시각을 기준으로 액세스 토큰 만료 시각을 계산합니다.
    ///
    /// `expires_in`이 없거나 범위를 벗어나면 `None`을 반환합니다.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_in_seconds
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
    }
}
