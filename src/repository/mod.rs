//! Repository layer - Persistence contract for boards and panels.
//!
//! [`EquipmentRepository`] is the storage abstraction the service layer depends on;
//! the SeaORM-backed implementations live in the submodules. Every call runs in its
//! own unit of work: writes open a transaction that is committed on success and
//! rolled back when dropped on any other path.
//!
//! There is no version column, so concurrent writes to the same id are
//! last-writer-wins.

pub mod board;
pub mod panel;

use crate::core::equipment::Equipment;
use crate::core::state::{BoardState, OperationalState, PanelState};
use crate::errors::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub use board::SeaOrmBoardRepository;
pub use panel::SeaOrmPanelRepository;

/// Durable CRUD access to one kind of equipment.
#[async_trait]
pub trait EquipmentRepository<S: OperationalState>: Send + Sync {
    /// Persists a new entity and returns it as stored.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Database`] on storage failure.
    async fn create(&self, item: Equipment<S>) -> Result<Equipment<S>>;

    /// Looks an entity up by id; absence is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Equipment<S>>>;

    /// Full scan of every stored entity, in no particular order.
    async fn list_all(&self) -> Result<Vec<Equipment<S>>>;

    /// Replaces every mutable column of an existing row with the values of `item`.
    ///
    /// Callers are expected to have checked existence beforehand.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Database`] on storage failure, including a missing row.
    async fn update(&self, item: Equipment<S>) -> Result<Equipment<S>>;

    /// Removes a row; returns whether anything was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    async fn exists(&self, id: Uuid) -> Result<bool>;
}

/// Repository for electronic boards
pub type BoardRepository = dyn EquipmentRepository<BoardState>;
/// Repository for electronic panels
pub type PanelRepository = dyn EquipmentRepository<PanelState>;
