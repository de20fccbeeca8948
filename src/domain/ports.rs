use crate::domain::model::{ServiceDraft, ServiceRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read/append capability over a named collection of the hosted document
/// store. The store decides ordering on reads and assigns ids on appends;
/// any transport, auth, or quota failure surfaces as `RemoteUnavailable`.
#[async_trait]
pub trait CollectionGateway: Send + Sync {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<ServiceRecord>>;

    /// Appends one record and returns the store-assigned id.
    async fn append(&self, collection: &str, draft: &ServiceDraft) -> Result<String>;
}

pub trait GatewayConfig: Send + Sync {
    fn endpoint(&self) -> &str;
    fn collection(&self) -> &str;
}
