//! The application object holding every feature store.

use std::sync::Arc;

use forge_config::ForgeConfig;
use forge_core::enums::InsertOrder;
use forge_llm::CompletionClient;
use forge_schema::SchemaRegistry;
use tokio::sync::broadcast;

use crate::error::StoreError;
use crate::generate::Generator;
use crate::kv::{FileStore, KeyValueStore, MemoryStore};
use crate::report::Report;
use crate::store_core::StoreEvent;
use crate::stores::{
    AutomationStore, BrainstormStore, FeatureStore, ProblemStore, RiskStore, StoreContext,
    TimelineStore,
};

/// All five stores, built once and handed to consumers.
pub struct Workspace {
    pub automation: AutomationStore,
    pub brainstorm: BrainstormStore,
    pub risk: RiskStore,
    pub timeline: TimelineStore,
    pub problems: ProblemStore,
    registry: Arc<SchemaRegistry>,
}

impl Workspace {
    /// Open every store under `config.storage.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the data directory or a stored
    /// list cannot be read.
    pub fn open(
        config: &ForgeConfig,
        client: Arc<dyn CompletionClient>,
    ) -> Result<Self, StoreError> {
        let kv = Arc::new(FileStore::new(&config.storage.data_dir)?);
        tracing::debug!(data_dir = %config.storage.data_dir.display(), "opening workspace");
        Self::with_store(kv, client, config.general.insert_order)
    }

    /// Open every store on an arbitrary backend.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if a stored list cannot be read.
    pub fn with_store(
        kv: Arc<dyn KeyValueStore>,
        client: Arc<dyn CompletionClient>,
        order: InsertOrder,
    ) -> Result<Self, StoreError> {
        let ctx = StoreContext {
            kv,
            registry: Arc::new(SchemaRegistry::new()),
            generator: Generator::new(client),
            order,
        };
        Self::from_context(&ctx)
    }

    /// A workspace that keeps everything in memory.
    ///
    /// # Errors
    ///
    /// Same as [`Workspace::with_store`].
    pub fn in_memory(
        client: Arc<dyn CompletionClient>,
        order: InsertOrder,
    ) -> Result<Self, StoreError> {
        Self::with_store(Arc::new(MemoryStore::new()), client, order)
    }

    fn from_context(ctx: &StoreContext) -> Result<Self, StoreError> {
        Ok(Self {
            automation: AutomationStore::open(ctx)?,
            brainstorm: BrainstormStore::open(ctx)?,
            risk: RiskStore::open(ctx)?,
            timeline: TimelineStore::open(ctx)?,
            problems: ProblemStore::open(ctx)?,
            registry: ctx.registry.clone(),
        })
    }

    /// The entity schema registry shared by every store.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Per-domain counts and average scores.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::new(
            &self.automation.list(),
            &self.brainstorm.list(),
            &self.risk.list(),
            &self.timeline.list(),
            &self.problems.list(),
        )
    }

    /// Whether any store has an operation in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.automation.is_loading()
            || self.brainstorm.is_loading()
            || self.risk.is_loading()
            || self.timeline.is_loading()
            || self.problems.is_loading()
    }

    /// One receiver per store, in domain order.
    #[must_use]
    pub fn subscribe_all(&self) -> Vec<broadcast::Receiver<StoreEvent>> {
        vec![
            self.automation.subscribe(),
            self.brainstorm.subscribe(),
            self.risk.subscribe(),
            self.timeline.subscribe(),
            self.problems.subscribe(),
        ]
    }

    /// Reset every store.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError::Persistence` encountered; later stores
    /// are still reset.
    pub fn reset(&self) -> Result<(), StoreError> {
        let results = [
            self.automation.reset(),
            self.brainstorm.reset(),
            self.risk.reset(),
            self.timeline.reset(),
            self.problems.reset(),
        ];
        results.into_iter().collect()
    }
}
