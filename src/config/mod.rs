//! # Configuration Module
//!
//! 어댑터 설정을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - DonationAlerts 엔드포인트 상수, 자격 증명 환경 변수
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # DonationAlerts OAuth
//! export DONATIONALERTS_CLIENT_ID="12345"
//! export DONATIONALERTS_CLIENT_SECRET="your-client-secret"
//! export DONATIONALERTS_REDIRECT_URI="https://yourdomain.com/auth/donationalerts/callback"
//!
//! # 바이너리 전용
//! export PROFILE="dev"       # .env.dev / .env.prod / .env 선택
//! export RUST_LOG="info"
//! ```

pub mod auth_config;

pub use auth_config::*;
