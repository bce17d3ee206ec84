//! Service layer - Orchestrates repository calls for boards and panels.
//!
//! Create, get and list are plain delegation. Update and delete refuse to touch an
//! id that is not stored and report [`Error::NotFound`] instead, independent of
//! what the repository would say.

use crate::{
    core::{
        equipment::{Equipment, EquipmentPatch},
        state::{BoardState, OperationalState, PanelState},
    },
    errors::{Error, Result},
    repository::EquipmentRepository,
};
use std::sync::Arc;
use uuid::Uuid;

/// Business operations over one kind of equipment.
pub struct EquipmentService<S: OperationalState> {
    repository: Arc<dyn EquipmentRepository<S>>,
}

/// Service for electronic boards
pub type BoardService = EquipmentService<BoardState>;
/// Service for electronic panels
pub type PanelService = EquipmentService<PanelState>;

// Manual impl: cloning only bumps the `Arc`, `S` itself never needs `Clone`.
impl<S: OperationalState> Clone for EquipmentService<S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<S: OperationalState> EquipmentService<S> {
    /// Creates a service on top of the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn EquipmentRepository<S>>) -> Self {
        Self { repository }
    }

    /// Stores a new, already validated entity.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn create(&self, item: Equipment<S>) -> Result<Equipment<S>> {
        self.repository.create(item).await
    }

    /// Returns `None` when nothing is stored under `id`.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn get(&self, id: Uuid) -> Result<Option<Equipment<S>>> {
        self.repository.get_by_id(id).await
    }

    /// # Errors
    /// Propagates storage errors.
    pub async fn list(&self) -> Result<Vec<Equipment<S>>> {
        self.repository.list_all().await
    }

    /// Applies `patch` to the stored entity and persists the result.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if `id` is not stored
    /// - [`Error::Validation`] if the patched entity would violate an invariant
    /// - storage errors from the repository
    pub async fn update(&self, id: Uuid, patch: EquipmentPatch<S>) -> Result<Equipment<S>> {
        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<S>(id))?;

        existing.apply(patch)?;
        self.repository.update(existing).await
    }

    /// Deletes the entity stored under `id`.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if `id` is not stored
    /// - storage errors from the repository
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repository.exists(id).await? {
            return Err(not_found::<S>(id));
        }
        self.repository.delete(id).await?;
        Ok(())
    }
}

fn not_found<S: OperationalState>(id: Uuid) -> Error {
    Error::NotFound {
        entity: S::ENTITY,
        id,
    }
}
