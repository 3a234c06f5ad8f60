//! 인증 서비스 모듈
//!
//! OAuth 2.0 소셜 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 범용 OAuth 2.0 Authorization Code 클라이언트
//! - DonationAlerts 소셜 로그인 어댑터
//! - 리프레시 토큰 갱신 (교체 가능한 요청 훅)
//!
//! # Security
//!
//! - CSRF 방지 (OAuth State 매개변수)
//! - Client Secret은 로그에 남기지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use donationalerts_auth::services::auth::{DonationAlertsAuthService, verify_state};
//!
//! let service = DonationAlertsAuthService::from_env()?;
//! let login = service.login_url(None);
//!
//! // 콜백
//! verify_state(&login.state, &callback_state)?;
//! let authenticated = service.user_from_code(&code).await?;
//! ```

pub mod donationalerts_auth_service;
pub mod oauth2_client;
pub mod social_provider;
pub mod state;

pub use donationalerts_auth_service::*;
pub use oauth2_client::*;
pub use social_provider::*;
pub use state::*;
