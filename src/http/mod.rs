//! HTTP 전송 계층 모듈
//!
//! - [`client`] - `HttpClient` 트레잇과 요청/응답 타입
//! - [`reqwest_client`] - reqwest 기반 기본 구현
//! - [`mock`] - 스크립트/녹화용 구현

pub mod client;
pub mod mock;
pub mod reqwest_client;

pub use client::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use mock::MockHttpClient;
pub use reqwest_client::ReqwestHttpClient;
