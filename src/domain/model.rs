use std::fmt;

/// Identity of a catalog record. Records created locally carry `Placeholder`
/// until the remote store acknowledges the write and hands back its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceId {
    Placeholder,
    Assigned(String),
}

impl ServiceId {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ServiceId::Placeholder)
    }

    pub fn assigned(id: impl Into<String>) -> Self {
        ServiceId::Assigned(id.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceId::Placeholder => "pending",
            ServiceId::Assigned(id) => id,
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One service offering in the catalog. Prices are whole monetary units
/// (VND), always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub creator_name: String,
    pub price: i64,
    pub service_name: String,
}

impl ServiceRecord {
    pub fn from_draft(draft: &ServiceDraft) -> Self {
        Self {
            id: ServiceId::Placeholder,
            creator_name: draft.creator_name.clone(),
            price: draft.price,
            service_name: draft.service_name.clone(),
        }
    }
}

/// Record-without-id, as sent to the remote store on append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDraft {
    pub creator_name: String,
    pub price: i64,
    pub service_name: String,
}

/// What the projection is allowed to render: a spinner while `Loading`,
/// the list once `Ready`, the stale list plus an error banner on `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}
