//! 공통 유틸리티 함수 모듈
//!
//! 크레이트 전체에서 사용되는 문자열 처리 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 스코프 분리, 비밀값 마스킹

pub mod string_utils;
