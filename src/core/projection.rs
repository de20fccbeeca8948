use crate::domain::model::{LoadStatus, ServiceRecord};

/// Read-only projection handed to presentation code.
///
/// A view is a snapshot-in-time: it never changes after it is returned, so a
/// consumer that knows a mutation happened must ask the controller for a
/// fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub status: LoadStatus,
    pub records: Vec<ServiceRecord>,
    pub last_error: Option<String>,
}

impl CatalogView {
    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
