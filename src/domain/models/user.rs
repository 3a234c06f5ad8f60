//! 정규화된 소셜 로그인 사용자 모델

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::models::token::TokenResponse;

/// 프로바이더 사용자 정보를 정규화한 값
///
/// 사용자 정보 조회마다 새로 생성되며, 반환된 뒤에는 호출자가 소유합니다.
/// 캐싱이나 영속화는 하지 않습니다.
///
/// 문자열 필드는 프로바이더 응답에 해당 키가 없으면 `None`이 됩니다.
/// `raw`에는 응답 봉투(`{"data": ...}`)가 아닌 안쪽 `data` 객체가 들어갑니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedUser {
    /// 프로바이더의 사용자 고유 ID
    pub id: i64,
    /// 닉네임 (DonationAlerts의 `code`)
    pub nickname: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// 프로필 이미지 URL
    pub avatar: Option<String>,
    pub raw: Map<String, Value>,
}

/// 전체 로그인 플로우 결과
///
/// 매핑된 사용자와, 그 사용자 정보를 조회할 때 사용한 토큰 응답을 함께 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user: NormalizedUser,
    pub token: TokenResponse,
}
