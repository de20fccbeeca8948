pub mod controller;
pub mod projection;
pub mod snapshot;

pub use crate::domain::model::{LoadStatus, ServiceDraft, ServiceId, ServiceRecord};
pub use crate::domain::ports::{CollectionGateway, GatewayConfig};
pub use crate::utils::error::Result;
pub use controller::SyncController;
pub use projection::CatalogView;
pub use snapshot::CatalogSnapshot;
