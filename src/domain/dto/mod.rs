//! 데이터 전송 객체(DTO) 모듈
//!
//! 호스트 애플리케이션과 주고받는 요청/응답 구조체를 정의합니다.

pub mod oauth_response;

pub use oauth_response::{AuthorizationRequest, OAuthLoginUrlResponse};
