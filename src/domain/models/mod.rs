//! # Domain Models Module
//!
//! OAuth 2.0 플로우에서 주고받는 값 객체들을 정의합니다.
//!
//! - [`credentials`] - 클라이언트 자격 증명 (불변)
//! - [`token`] - 토큰 엔드포인트 응답
//! - [`user`] - 정규화된 사용자와 로그인 결과

pub mod credentials;
pub mod token;
pub mod user;

pub use credentials::ClientCredentials;
pub use token::TokenResponse;
pub use user::{AuthenticatedUser, NormalizedUser};

/// 프로바이더 사용자 정보 응답 원본 (`{"data": {...}}` 봉투)
///
/// 매핑에 사용하는 필드 외에는 불투명한 값으로 취급합니다.
pub type RawUserPayload = serde_json::Map<String, serde_json::Value>;
