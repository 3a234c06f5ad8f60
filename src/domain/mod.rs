//! # Domain Layer Module
//!
//! 어댑터가 다루는 값 객체와 DTO를 모아 둔 도메인 계층입니다.
//! 이 계층은 I/O를 하지 않으며, 서비스 계층이 생성하고 호출자에게 넘겨줍니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 자격 증명, 토큰 응답, 정규화된 사용자
//! └── DTOs    - 인가 요청 / 로그인 URL 응답
//!      │
//!      ▼
//! Service Layer (OAuth2Client, DonationAlertsAuthService)
//!      │
//!      ▼
//! HTTP Layer (HttpClient 구현체)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! ClientCredentials ──► 인가 URL / 토큰 교환
//! TokenResponse.access_token ──► 사용자 정보 조회
//! RawUserPayload ──(1회 소비)──► NormalizedUser
//! ```

pub mod dto;
pub mod models;
