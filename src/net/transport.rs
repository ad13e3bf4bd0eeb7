use async_trait::async_trait;

/// Executes a fully built request.
///
/// `reqwest::Client` implements this, so callers normally just hand over a
/// client configured with whatever timeouts, proxies or middleware they need.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        reqwest::Client::execute(self, request).await
    }
}
