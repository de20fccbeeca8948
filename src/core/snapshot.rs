use crate::domain::model::{ServiceDraft, ServiceId, ServiceRecord};

/// The in-memory copy of the remote collection, in display order.
///
/// Only the controller writes it: full replacement on a successful load,
/// append at the tail for an optimistic insert, then either an in-place id
/// swap once the store acknowledges or removal on rollback. At most one
/// record carries the placeholder id at a time.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    records: Vec<ServiceRecord>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records
            .iter()
            .any(|r| matches!(&r.id, ServiceId::Assigned(assigned) if assigned == id))
    }

    /// Replaces the whole snapshot with a freshly loaded sequence. The order
    /// the store handed back is authoritative.
    pub fn replace(&mut self, records: Vec<ServiceRecord>) {
        self.records = records;
    }

    /// Appends the draft with a placeholder id, pending acknowledgment.
    pub fn push_placeholder(&mut self, draft: &ServiceDraft) {
        debug_assert!(
            !self.has_placeholder(),
            "a previous optimistic insert is still unacknowledged"
        );
        self.records.push(ServiceRecord::from_draft(draft));
    }

    pub fn has_placeholder(&self) -> bool {
        self.records.iter().any(|r| r.id.is_placeholder())
    }

    /// Swaps the placeholder's identity for the store-assigned id, in place.
    ///
    /// Two races with a concurrent reload are absorbed here: if the reload
    /// already delivered the acknowledged record under `assigned_id`, the
    /// placeholder is dropped instead of resolved (no duplicate id); if the
    /// reload replaced the snapshot and the placeholder is gone, this is a
    /// no-op.
    pub fn resolve_placeholder(&mut self, assigned_id: &str) {
        let Some(pos) = self.records.iter().position(|r| r.id.is_placeholder()) else {
            return;
        };
        if self.contains_id(assigned_id) {
            self.records.remove(pos);
            return;
        }
        self.records[pos].id = ServiceId::assigned(assigned_id);
    }

    /// Rolls back the optimistic insert after a failed append.
    pub fn remove_placeholder(&mut self) {
        self.records.retain(|r| !r.id.is_placeholder());
    }
}
