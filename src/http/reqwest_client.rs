//! reqwest 기반 기본 전송 계층

use async_trait::async_trait;

use crate::errors::{AuthError, AuthResult};
use crate::http::client::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// `reqwest::Client`를 감싼 [`HttpClient`] 구현
///
/// `reqwest::Client`는 내부적으로 `Arc`를 사용하므로 복제 비용이 작고,
/// 커넥션 풀을 공유한 채 여러 태스크에서 동시에 사용할 수 있습니다.
///
/// 타임아웃이나 프록시가 필요하면 직접 구성한 클라이언트를
/// [`ReqwestHttpClient::from_client`]로 넘기세요.
///
/// ```rust,ignore
/// let client = reqwest::Client::builder()
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
/// service.set_http_client(Arc::new(ReqwestHttpClient::from_client(client)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> AuthResult<HttpResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url).form(&request.form),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(AuthError::network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(AuthError::network)?;

        Ok(HttpResponse { status, body })
    }
}
