//! 호스트 프레임워크에 등록되는 소셜 로그인 프로바이더 인터페이스

use async_trait::async_trait;

use crate::domain::models::{NormalizedUser, RawUserPayload, TokenResponse};
use crate::errors::AuthResult;

/// 플러그형 소셜 로그인 프로바이더
///
/// 호스트는 프로바이더를 `Arc<dyn SocialProvider>`로 보관하고 아래 다섯 가지
/// 연산만으로 로그인 플로우를 구성합니다.
#[async_trait]
pub trait SocialProvider: Send + Sync {
    /// 프로바이더 식별자 (로그/라우팅용)
    fn name(&self) -> &'static str;

    fn auth_url(&self, state: &str) -> String;

    fn token_url(&self) -> &'static str;

    async fn refresh_access_token(&self, refresh_token: &str) -> AuthResult<TokenResponse>;

    async fn user_by_token(&self, access_token: &str) -> AuthResult<RawUserPayload>;

    fn map_user_to_object(&self, payload: &RawUserPayload) -> AuthResult<NormalizedUser>;
}
