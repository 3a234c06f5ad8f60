//! DonationAlerts 소셜 로그인 어댑터
//!
//! DonationAlerts OAuth 2.0 Authorization Code 플로우를 구현하는 라이브러리입니다.
//! 호스트 애플리케이션은 이 크레이트를 플러그형 소셜 로그인 프로바이더로 등록해 사용합니다.
//!
//! # Features
//!
//! - **인가 URL 생성**: `client_id`, `redirect_uri`, `scope`, `response_type`, `state`
//! - **토큰 교환/갱신**: Authorization Code 교환, 리프레시 토큰 갱신
//! - **사용자 조회**: Bearer 토큰으로 프로필 조회 후 정규화
//! - **교체 가능한 전송 계층**: `HttpClient` 트레잇 (reqwest 기본, 테스트용 Mock)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  DonationAlertsAuthService   │ ← SocialProvider 구현
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │ OAuth2Client + ProviderConfig│ ← 범용 OAuth 2.0 로직
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │       dyn HttpClient         │ ← reqwest / Mock
//! └──────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use donationalerts_auth::services::auth::DonationAlertsAuthService;
//!
//! let service = DonationAlertsAuthService::from_env()?;
//! let login = service.login_url(None);
//!
//! // ... 콜백에서 code 수신
//! let authenticated = service.user_from_code(&code).await?;
//! println!("{:?}", authenticated.user.nickname);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;
pub mod utils;

pub use domain::models::{AuthenticatedUser, ClientCredentials, NormalizedUser, RawUserPayload, TokenResponse};
pub use errors::{AuthError, AuthResult};
pub use services::auth::{DonationAlertsAuthService, SocialProvider};
