//! SeaORM-backed repository for electronic panels.

use crate::{
    core::{
        equipment::{Attributes, ElectronicPanel, Equipment},
        state::PanelState,
    },
    entities::{ElectronicPanelEntity, electronic_panel},
    errors::Result,
    repository::EquipmentRepository,
};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Stores panels in the `electronic_panels` table.
#[derive(Clone, Debug)]
pub struct SeaOrmPanelRepository {
    db: DatabaseConnection,
}

impl SeaOrmPanelRepository {
    /// Creates a repository sharing the given connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<electronic_panel::Model> for ElectronicPanel {
    fn from(model: electronic_panel::Model) -> Self {
        Equipment::restore(
            model.id,
            Attributes {
                name: model.name,
                location: model.location,
                brand: model.brand,
                amperage_capacity: model.amperage_capacity,
                state: model.state,
                year_manufactured: model.year_manufactured,
                year_installed: model.year_installed,
            },
        )
    }
}

/// Every column is `Set`, so both insert and update write the full record.
fn into_active_model(panel: ElectronicPanel) -> electronic_panel::ActiveModel {
    let (id, attrs) = panel.into_parts();
    electronic_panel::ActiveModel {
        id: Set(id),
        name: Set(attrs.name),
        location: Set(attrs.location),
        brand: Set(attrs.brand),
        amperage_capacity: Set(attrs.amperage_capacity),
        state: Set(attrs.state),
        year_manufactured: Set(attrs.year_manufactured),
        year_installed: Set(attrs.year_installed),
    }
}

#[async_trait]
impl EquipmentRepository<PanelState> for SeaOrmPanelRepository {
    #[instrument(skip(self, item), fields(id = %item.id()))]
    async fn create(&self, item: ElectronicPanel) -> Result<ElectronicPanel> {
        let txn = self.db.begin().await?;
        let model = into_active_model(item).insert(&txn).await?;
        txn.commit().await?;
        debug!("Electronic panel created");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ElectronicPanel>> {
        let model = ElectronicPanelEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<ElectronicPanel>> {
        let models = ElectronicPanelEntity::find().all(&self.db).await?;
        debug!(count = models.len(), "Listed electronic panels");
        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, item), fields(id = %item.id()))]
    async fn update(&self, item: ElectronicPanel) -> Result<ElectronicPanel> {
        let txn = self.db.begin().await?;
        let model = into_active_model(item).update(&txn).await?;
        txn.commit().await?;
        debug!("Electronic panel updated");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool> {
        let txn = self.db.begin().await?;
        let result = ElectronicPanelEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        debug!(rows_affected = result.rows_affected, "Electronic panel delete executed");
        Ok(result.rows_affected > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Uuid) -> Result<bool> {
        let count = ElectronicPanelEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
