use crate::core::projection::CatalogView;
use crate::core::snapshot::CatalogSnapshot;
use crate::domain::model::{LoadStatus, ServiceDraft};
use crate::domain::ports::CollectionGateway;
use crate::utils::error::Result;
use crate::utils::validation::{parse_positive_price, require_non_empty};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

struct CatalogState {
    snapshot: CatalogSnapshot,
    status: LoadStatus,
    last_error: Option<String>,
}

/// Orchestrates loads and optimistic appends against the injected gateway.
///
/// The controller is the only writer of the snapshot. Host code is expected
/// to serialize calls into it (one logical thread of control); the lock is
/// there so read-only observers can take views at any time, and it is never
/// held across a gateway round-trip.
pub struct SyncController<G: CollectionGateway> {
    gateway: G,
    collection: String,
    state: RwLock<CatalogState>,
    refresh_seq: AtomicU64,
}

impl<G: CollectionGateway> SyncController<G> {
    pub fn new(gateway: G, collection: impl Into<String>) -> Self {
        Self {
            gateway,
            collection: collection.into(),
            state: RwLock::new(CatalogState {
                snapshot: CatalogSnapshot::new(),
                status: LoadStatus::Idle,
                last_error: None,
            }),
            refresh_seq: AtomicU64::new(0),
        }
    }

    /// Reloads the whole collection and replaces the snapshot.
    ///
    /// Safe to call on every screen (re-)entry. Each invocation takes a fresh
    /// request token; a response that comes back after a newer refresh has
    /// been issued is discarded wholesale, so a slow old load can never
    /// overwrite a newer one. On failure the previous snapshot stays visible
    /// and the status flips to `Failed`.
    pub async fn refresh(&self) -> Result<()> {
        let token = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.status = LoadStatus::Loading;
        }
        tracing::debug!(token, collection = %self.collection, "loading catalog");

        let outcome = self.gateway.fetch_all(&self.collection).await;

        let mut state = self.state.write().await;
        if self.refresh_seq.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "discarding superseded refresh response");
            return Ok(());
        }
        match outcome {
            Ok(records) => {
                tracing::debug!(count = records.len(), "catalog loaded");
                state.snapshot.replace(records);
                state.status = LoadStatus::Ready;
                state.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed, keeping previous snapshot");
                state.status = LoadStatus::Failed;
                state.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Validates the submitted form fields, appends the record optimistically,
    /// and reconciles or rolls back once the store answers.
    ///
    /// Validation failures never touch the snapshot. A gateway failure rolls
    /// the placeholder back and is returned to the caller, which keeps the
    /// entered text for resubmission; the controller never retries on its own.
    pub async fn submit_new_record(
        &self,
        creator_name: &str,
        price: &str,
        service_name: &str,
    ) -> Result<String> {
        require_non_empty("creator name", creator_name)?;
        require_non_empty("price", price)?;
        require_non_empty("service name", service_name)?;
        let price = parse_positive_price(price)?;

        let draft = ServiceDraft {
            creator_name: creator_name.to_string(),
            price,
            service_name: service_name.to_string(),
        };

        {
            let mut state = self.state.write().await;
            state.snapshot.push_placeholder(&draft);
        }
        tracing::debug!(service = %draft.service_name, "optimistic insert pending acknowledgment");

        match self.gateway.append(&self.collection, &draft).await {
            Ok(assigned_id) => {
                let mut state = self.state.write().await;
                state.snapshot.resolve_placeholder(&assigned_id);
                tracing::debug!(id = %assigned_id, "append acknowledged");
                Ok(assigned_id)
            }
            Err(err) => {
                let mut state = self.state.write().await;
                state.snapshot.remove_placeholder();
                state.last_error = Some(err.to_string());
                tracing::warn!(error = %err, "append failed, optimistic insert rolled back");
                Err(err)
            }
        }
    }

    /// Takes a snapshot-in-time view for rendering.
    pub async fn current_view(&self) -> CatalogView {
        let state = self.state.read().await;
        CatalogView {
            status: state.status,
            records: state.snapshot.records().to_vec(),
            last_error: state.last_error.clone(),
        }
    }
}
