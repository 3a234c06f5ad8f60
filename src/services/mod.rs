//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 현재는 OAuth 2.0 소셜 로그인 관련 서비스만 포함합니다.

pub mod auth;
