use crate::domain::model::{ServiceDraft, ServiceId, ServiceRecord};
use crate::domain::ports::{CollectionGateway, GatewayConfig};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Wire form of a stored document. The store speaks camelCase, the domain
/// model does not, so the translation stays here at the edge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDocument {
    id: String,
    creator_name: String,
    price: i64,
    service_name: String,
}

impl From<ServiceDocument> for ServiceRecord {
    fn from(doc: ServiceDocument) -> Self {
        ServiceRecord {
            id: ServiceId::Assigned(doc.id),
            creator_name: doc.creator_name,
            price: doc.price,
            service_name: doc.service_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftDocument<'a> {
    creator_name: &'a str,
    price: i64,
    service_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    id: String,
}

/// Gateway speaking the document-store REST dialect:
/// `GET/POST {endpoint}/collections/{name}/documents`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &impl GatewayConfig) -> Self {
        Self::new(config.endpoint())
    }

    fn documents_url(&self, collection: &str) -> String {
        format!("{}/collections/{}/documents", self.endpoint, collection)
    }
}

#[async_trait]
impl CollectionGateway for HttpGateway {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<ServiceRecord>> {
        let url = self.documents_url(collection);
        tracing::debug!(%url, "fetching collection");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::remote(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }

        let documents: Vec<ServiceDocument> = response.json().await?;
        tracing::debug!(count = documents.len(), "collection fetched");
        Ok(documents.into_iter().map(ServiceRecord::from).collect())
    }

    async fn append(&self, collection: &str, draft: &ServiceDraft) -> Result<String> {
        let url = self.documents_url(collection);
        let body = DraftDocument {
            creator_name: &draft.creator_name,
            price: draft.price,
            service_name: &draft.service_name,
        };
        tracing::debug!(%url, service = %draft.service_name, "appending document");

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::remote(format!(
                "POST {} returned {}",
                url,
                response.status()
            )));
        }

        let ack: AppendResponse = response.json().await?;
        Ok(ack.id)
    }
}
