//! Shared state machine behind every feature store.
//!
//! ```text
//!            begin()                 commit() / fail()
//!   Idle ─────────────► Loading ───────────────────────► Idle
//!     ▲   in_flight += 1    │     in_flight -= 1  (when 0)
//!     └─────────────────────┘
//!   error: orthogonal flag, set by fail()/reject(), cleared by commit()
//! ```
//!
//! A [`Ticket`] that is dropped without being settled (the caller's future
//! was cancelled or timed out) leaves Loading on its own.
//!
//! All state lives behind one `std::sync::Mutex` that is only held for
//! synchronous work; network calls happen between `begin` and
//! `commit`/`fail`, outside the lock.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use forge_core::entities::Entity;
use forge_core::enums::{Domain, InsertOrder};
use forge_core::ids;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::StoreError;
use crate::snapshot::SnapshotStore;

/// Capacity of each store's notification channel.
const EVENT_CAPACITY: usize = 64;

/// Notification emitted on every store transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loading { domain: Domain },
    Created { domain: Domain, id: String },
    Updated { domain: Domain, id: String },
    Deleted { domain: Domain, id: String },
    Failed { domain: Domain, message: String },
    Reset { domain: Domain },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Idle,
    Loading,
}

/// Sequence and generation an operation was started with.
///
/// `seq` orders submissions; `generation` ties the operation to the store
/// state it started against, so results arriving after a reset are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Issued {
    seq: u64,
    generation: u64,
}

/// Guard for one in-flight operation, returned by [`StoreCore::begin`].
///
/// Hand it to `commit`, `commit_update` or `fail` to settle it. Dropping it
/// unsettled releases its share of the in-flight count without touching the
/// list or the error flag.
#[must_use = "an unsettled ticket ends the operation when dropped"]
pub struct Ticket<'a, T: Entity> {
    core: &'a StoreCore<T>,
    issued: Issued,
    settled: bool,
}

impl<T: Entity> Ticket<'_, T> {
    fn settle(mut self) -> Issued {
        self.settled = true;
        self.issued
    }
}

impl<T: Entity> Drop for Ticket<'_, T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let released = {
            let mut state = self.core.state();
            let current = state.is_current(self.issued);
            if current {
                state.in_flight = state.in_flight.saturating_sub(1);
            }
            current
        };
        tracing::debug!(
            domain = %T::DOMAIN,
            seq = self.issued.seq,
            released,
            "operation abandoned before completion"
        );
    }
}

struct Slot<T> {
    /// Submission sequence; 0 for entities loaded from storage.
    seq: u64,
    entity: T,
}

struct State<T> {
    slots: Vec<Slot<T>>,
    in_flight: usize,
    error: Option<String>,
    next_seq: u64,
    generation: u64,
}

impl<T: Entity> State<T> {
    fn entities(&self) -> Vec<T> {
        self.slots.iter().map(|slot| slot.entity.clone()).collect()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.entity.id() == id)
    }

    fn insert(&mut self, order: InsertOrder, seq: u64, entity: T) {
        let index = match order {
            InsertOrder::Completion => 0,
            InsertOrder::Submission => self
                .slots
                .iter()
                .position(|slot| slot.seq < seq)
                .unwrap_or(self.slots.len()),
        };
        self.slots.insert(index, Slot { seq, entity });
    }

    const fn is_current(&self, issued: Issued) -> bool {
        issued.generation == self.generation
    }
}

/// Entity list, loading/error flags, persistence, and notifications for one
/// domain.
pub struct StoreCore<T: Entity> {
    state: Mutex<State<T>>,
    snapshot: SnapshotStore<T>,
    order: InsertOrder,
    events: broadcast::Sender<StoreEvent>,
}

impl<T: Entity> StoreCore<T> {
    /// Open a store, rehydrating its list from `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored entry cannot be read.
    pub fn open(snapshot: SnapshotStore<T>, order: InsertOrder) -> Result<Self, StoreError> {
        let slots = snapshot
            .load()?
            .into_iter()
            .map(|entity| Slot { seq: 0, entity })
            .collect();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            state: Mutex::new(State {
                slots,
                in_flight: 0,
                error: None,
                next_seq: 1,
                generation: 0,
            }),
            snapshot,
            order,
            events,
        })
    }

    fn state(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, event: StoreEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    // ── Operation lifecycle ────────────────────────────────────────

    /// Enter Loading and take a sequence number.
    pub fn begin(&self) -> Ticket<'_, T> {
        let issued = {
            let mut state = self.state();
            state.in_flight += 1;
            let seq = state.next_seq;
            state.next_seq += 1;
            Issued {
                seq,
                generation: state.generation,
            }
        };
        tracing::debug!(domain = %T::DOMAIN, seq = issued.seq, "operation started");
        self.notify(StoreEvent::Loading { domain: T::DOMAIN });
        Ticket {
            core: self,
            issued,
            settled: false,
        }
    }

    /// Finish `ticket` successfully: build the entity with a fresh id and the
    /// current time, insert it, clear the error, persist, and notify.
    ///
    /// If persisting fails the entity stays in memory, the error is recorded,
    /// and `StoreError::Persistence` is returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Discarded` if the store was reset after `ticket`
    /// was issued, `StoreError::Core` if no id could be generated, or
    /// `StoreError::Persistence` as described above.
    pub fn commit(
        &self,
        ticket: Ticket<'_, T>,
        build: impl FnOnce(String, DateTime<Utc>) -> T,
    ) -> Result<T, StoreError> {
        let issued = ticket.settle();
        let mut state = self.state();
        if !state.is_current(issued) {
            drop(state);
            return Err(discarded::<T>(issued));
        }
        state.in_flight = state.in_flight.saturating_sub(1);

        let prefix = ids::prefix_for(T::DOMAIN);
        let id = match ids::generate_unique_id(prefix, |candidate| {
            state.position(candidate).is_some()
        }) {
            Ok(id) => id,
            Err(e) => {
                let err = StoreError::from(e);
                self.record_failure(&mut state, &err);
                return Err(err);
            }
        };

        let entity = build(id, Utc::now());
        let created = entity.clone();
        state.insert(self.order, issued.seq, entity);
        state.error = None;
        tracing::debug!(domain = %T::DOMAIN, id = created.id(), seq = issued.seq, "entity created");

        self.persist(&mut state)?;
        self.notify(StoreEvent::Created {
            domain: T::DOMAIN,
            id: created.id().to_string(),
        });
        Ok(created)
    }

    /// Finish `ticket` by changing an existing entity in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Discarded` after a reset, `StoreError::NotFound` if
    /// the entity was deleted while the request was in flight, or
    /// `StoreError::Persistence` if the write fails (the change is kept).
    pub fn commit_update(
        &self,
        ticket: Ticket<'_, T>,
        id: &str,
        apply: impl FnOnce(&mut T),
    ) -> Result<T, StoreError> {
        let issued = ticket.settle();
        let mut state = self.state();
        if !state.is_current(issued) {
            drop(state);
            return Err(discarded::<T>(issued));
        }
        state.in_flight = state.in_flight.saturating_sub(1);

        let Some(index) = state.position(id) else {
            let err = not_found::<T>(id);
            self.record_failure(&mut state, &err);
            return Err(err);
        };

        apply(&mut state.slots[index].entity);
        let updated = state.slots[index].entity.clone();
        state.error = None;
        tracing::debug!(domain = %T::DOMAIN, id, "entity updated");

        self.persist(&mut state)?;
        self.notify(StoreEvent::Updated {
            domain: T::DOMAIN,
            id: id.to_string(),
        });
        Ok(updated)
    }

    /// Finish `ticket` with a failure: record the message, keep the list
    /// unchanged, persist it, and notify. Returns the error for the caller.
    pub fn fail(&self, ticket: Ticket<'_, T>, err: StoreError) -> StoreError {
        let issued = ticket.settle();
        let mut state = self.state();
        if !state.is_current(issued) {
            drop(state);
            tracing::debug!(domain = %T::DOMAIN, %err, "failure after reset ignored");
            return discarded::<T>(issued);
        }
        state.in_flight = state.in_flight.saturating_sub(1);
        self.record_failure(&mut state, &err);
        if let Err(e) = self.snapshot.save(&state.entities()) {
            tracing::warn!(domain = %T::DOMAIN, %e, "could not persist after failure");
        }
        err
    }

    /// Reject an operation before it starts (bad input, unknown id). Records
    /// the error and notifies without entering Loading.
    pub fn reject(&self, err: StoreError) -> StoreError {
        let mut state = self.state();
        self.record_failure(&mut state, &err);
        err
    }

    fn record_failure(&self, state: &mut State<T>, err: &StoreError) {
        let message = err.to_string();
        tracing::warn!(domain = %T::DOMAIN, error = %message, "store operation failed");
        state.error = Some(message.clone());
        self.notify(StoreEvent::Failed {
            domain: T::DOMAIN,
            message,
        });
    }

    fn persist(&self, state: &mut State<T>) -> Result<(), StoreError> {
        if let Err(err) = self.snapshot.save(&state.entities()) {
            self.record_failure(state, &err);
            return Err(err);
        }
        Ok(())
    }

    // ── Queries and direct mutations ───────────────────────────────

    /// Current entities, in list order.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.state().entities()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<T> {
        let state = self.state();
        state.position(id).map(|i| state.slots[i].entity.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state().slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove an entity. Returns whether anything was removed; an unknown id
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the write fails (the entity stays
    /// removed from memory).
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state();
        let Some(index) = state.position(id) else {
            return Ok(false);
        };
        state.slots.remove(index);
        self.persist(&mut state)?;
        self.notify(StoreEvent::Deleted {
            domain: T::DOMAIN,
            id: id.to_string(),
        });
        Ok(true)
    }

    #[must_use]
    pub fn status(&self) -> StoreStatus {
        if self.state().in_flight > 0 {
            StoreStatus::Loading
        } else {
            StoreStatus::Idle
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status() == StoreStatus::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Drop every entity and the stored entry, and invalidate in-flight
    /// operations so their results are discarded on arrival.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the stored entry cannot be removed.
    pub fn reset(&self) -> Result<(), StoreError> {
        {
            let mut state = self.state();
            state.generation += 1;
            state.slots.clear();
            state.in_flight = 0;
            state.error = None;
        }
        self.snapshot.clear()?;
        tracing::debug!(domain = %T::DOMAIN, "store reset");
        self.notify(StoreEvent::Reset { domain: T::DOMAIN });
        Ok(())
    }

    /// Write the current list to `<dir>/<domain>-<YYYY-MM-DD>.json` and return
    /// the path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the directory or file cannot be
    /// written.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        let entities = self.list();
        std::fs::create_dir_all(dir).map_err(|e| StoreError::persistence(dir.display(), e))?;

        let path = dir.join(T::DOMAIN.export_file_name(Utc::now().date_naive()));
        let text = serde_json::to_string_pretty(&entities)
            .map_err(|e| StoreError::persistence(path.display(), e))?;
        std::fs::write(&path, text).map_err(|e| StoreError::persistence(path.display(), e))?;

        tracing::debug!(
            domain = %T::DOMAIN,
            path = %path.display(),
            count = entities.len(),
            "exported"
        );
        Ok(path)
    }

    /// Subscribe to this store's notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}

fn discarded<T: Entity>(issued: Issued) -> StoreError {
    tracing::debug!(domain = %T::DOMAIN, seq = issued.seq, "result discarded after reset");
    StoreError::Discarded
}

pub(crate) fn not_found<T: Entity>(id: &str) -> StoreError {
    StoreError::NotFound {
        entity_type: T::DOMAIN.schema_name().replace('_', " "),
        id: id.to_string(),
    }
}
