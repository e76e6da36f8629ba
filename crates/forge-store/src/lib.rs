//! # forge-store
//!
//! Feature stores and persistence for Forge.
//!
//! Each feature store owns one entity list and runs the
//! prompt → completion → validation → commit cycle for its domain:
//!
//! ```text
//! input ─► prompts::* ─► CompletionClient ─► forge_schema::validate
//!                                                    │
//!                     StoreCore::commit ◄────────────┘
//!                     (insert, clear error, persist, notify)
//! ```
//!
//! - [`KeyValueStore`]: durable key → JSON text ([`FileStore`], [`MemoryStore`])
//! - [`SnapshotStore`]: one generic entity-list adapter for every domain
//! - [`StoreCore`]: list, loading/error state, ordering, reset guard, events
//! - [`stores`]: the five domain stores
//! - [`Workspace`]: all stores built once from configuration
//! - [`Report`]: per-domain counts and average scores

mod error;
mod generate;
mod kv;
mod report;
mod snapshot;
mod store_core;
pub mod stores;
mod workspace;

pub use error::StoreError;
pub use generate::Generator;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use report::{DomainReport, Report, ScoreAverage, Scored};
pub use snapshot::SnapshotStore;
pub use store_core::{StoreCore, StoreEvent, StoreStatus, Ticket};
pub use stores::{
    AutomationStore, BrainstormStore, FeatureStore, ProblemStore, RiskStore, StoreContext,
    TimelineStore,
};
pub use workspace::Workspace;
