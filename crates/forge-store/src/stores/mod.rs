//! The five feature stores.
//!
//! Each store pairs a [`StoreCore`] with a [`Generator`] and adds its
//! domain's generate actions. Everything else (listing, deletion, export,
//! reset, notifications) comes from [`FeatureStore`].

mod automation;
mod brainstorm;
mod problem;
mod risk;
mod timeline;

pub use automation::AutomationStore;
pub use brainstorm::BrainstormStore;
pub use problem::ProblemStore;
pub use risk::RiskStore;
pub use timeline::TimelineStore;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use forge_core::entities::Entity;
use forge_core::enums::InsertOrder;
use forge_schema::SchemaRegistry;
use tokio::sync::broadcast;

use crate::error::StoreError;
use crate::generate::Generator;
use crate::kv::KeyValueStore;
use crate::snapshot::SnapshotStore;
use crate::store_core::{StoreCore, StoreEvent, StoreStatus};

/// What every store is opened with.
#[derive(Clone)]
pub struct StoreContext {
    pub kv: Arc<dyn KeyValueStore>,
    pub registry: Arc<SchemaRegistry>,
    pub generator: Generator,
    pub order: InsertOrder,
}

impl StoreContext {
    pub(crate) fn open_core<T: Entity>(&self) -> Result<StoreCore<T>, StoreError> {
        StoreCore::open(
            SnapshotStore::new(self.kv.clone(), self.registry.clone()),
            self.order,
        )
    }
}

/// Operations common to every feature store.
pub trait FeatureStore {
    type Entity: Entity;

    fn core(&self) -> &StoreCore<Self::Entity>;

    fn list(&self) -> Vec<Self::Entity> {
        self.core().list()
    }

    fn get(&self, id: &str) -> Option<Self::Entity> {
        self.core().get(id)
    }

    /// Remove an entity; an unknown id is a no-op returning `false`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the write fails.
    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.core().delete(id)
    }

    fn is_loading(&self) -> bool {
        self.core().is_loading()
    }

    fn status(&self) -> StoreStatus {
        self.core().status()
    }

    fn error(&self) -> Option<String> {
        self.core().error()
    }

    fn clear_error(&self) {
        self.core().clear_error();
    }

    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the file cannot be written.
    fn export(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        self.core().export(dir)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored entry cannot be removed.
    fn reset(&self) -> Result<(), StoreError> {
        self.core().reset()
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.core().subscribe()
    }
}
