use async_trait::async_trait;

/// Something that can send a single probe and report whether it went out
#[async_trait]
pub trait ProbeSender: Send + Sync {
    async fn send_probe(&self) -> bool;
}
