//! SeaORM-backed repository for electronic boards.

use crate::{
    core::{
        equipment::{Attributes, ElectronicBoard, Equipment},
        state::BoardState,
    },
    entities::{ElectronicBoardEntity, electronic_board},
    errors::Result,
    repository::EquipmentRepository,
};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Stores boards in the `electronic_boards` table.
#[derive(Clone, Debug)]
pub struct SeaOrmBoardRepository {
    db: DatabaseConnection,
}

impl SeaOrmBoardRepository {
    /// Creates a repository sharing the given connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<electronic_board::Model> for ElectronicBoard {
    fn from(model: electronic_board::Model) -> Self {
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
fn into_active_model(board: ElectronicBoard) -> electronic_board::ActiveModel {
    let (id, attrs) = board.into_parts();
    electronic_board::ActiveModel {
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
impl EquipmentRepository<BoardState> for SeaOrmBoardRepository {
    #[instrument(skip(self, item), fields(id = %item.id()))]
    async fn create(&self, item: ElectronicBoard) -> Result<ElectronicBoard> {
        let txn = self.db.begin().await?;
        let model = into_active_model(item).insert(&txn).await?;
        txn.commit().await?;
        debug!("Electronic board created");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> Result<Option<ElectronicBoard>> {
        let model = ElectronicBoardEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<ElectronicBoard>> {
        let models = ElectronicBoardEntity::find().all(&self.db).await?;
        debug!(count = models.len(), "Listed electronic boards");
        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, item), fields(id = %item.id()))]
    async fn update(&self, item: ElectronicBoard) -> Result<ElectronicBoard> {
        let txn = self.db.begin().await?;
        let model = into_active_model(item).update(&txn).await?;
        txn.commit().await?;
        debug!("Electronic board updated");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool> {
        let txn = self.db.begin().await?;
        let result = ElectronicBoardEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        debug!(rows_affected = result.rows_affected, "Electronic board delete executed");
        Ok(result.rows_affected > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Uuid) -> Result<bool> {
        let count = ElectronicBoardEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::{board_attributes, setup_test_db};

    async fn setup() -> Result<SeaOrmBoardRepository> {
        Ok(SeaOrmBoardRepository::new(setup_test_db().await?))
    }

    #[tokio::test]
    async fn test_create_then_read_back() -> Result<()> {
        let repo = setup().await?;
        let board = ElectronicBoard::new(board_attributes())?;

        let created = repo.create(board.clone()).await?;
        assert_eq!(created, board);

        let found = repo.get_by_id(board.id()).await?.unwrap();
        assert_eq!(found, board);
        assert_eq!(found.brand(), Some("Siemens"));
        assert_eq!(found.amperage_capacity(), 400.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_is_none() -> Result<()> {
        let repo = setup().await?;
        assert!(repo.get_by_id(Uuid::new_v4()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_all_returns_every_row() -> Result<()> {
        let repo = setup().await?;
        assert!(repo.list_all().await?.is_empty());

        let first = repo.create(ElectronicBoard::new(board_attributes())?).await?;
        let second = repo
            .create(ElectronicBoard::new(Attributes {
                name: "Sub Panel".to_string(),
                brand: None,
                ..board_attributes()
            })?)
            .await?;

        let all = repo.list_all().await?;
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_all_mutable_fields() -> Result<()> {
        let repo = setup().await?;
        let mut board = repo.create(ElectronicBoard::new(board_attributes())?).await?;

        board.set_name("Renamed")?;
        board.set_brand(None)?;
        board.set_state(BoardState::OutOfService);
        board.set_amperage_capacity(125.5)?;

        let updated = repo.update(board.clone()).await?;
        assert_eq!(updated, board);

        let stored = repo.get_by_id(board.id()).await?.unwrap();
        assert_eq!(stored.name(), "Renamed");
        assert_eq!(stored.brand(), None);
        assert_eq!(stored.state(), BoardState::OutOfService);
        assert_eq!(stored.amperage_capacity(), 125.5);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_a_storage_error() -> Result<()> {
        let repo = setup().await?;
        let board = ElectronicBoard::new(board_attributes())?;
        let result = repo.update(board).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() -> Result<()> {
        let repo = setup().await?;
        let board = repo.create(ElectronicBoard::new(board_attributes())?).await?;

        assert!(repo.exists(board.id()).await?);
        assert!(repo.delete(board.id()).await?);
        assert!(!repo.exists(board.id()).await?);
        assert!(!repo.delete(board.id()).await?);
        assert!(repo.get_by_id(board.id()).await?.is_none());
        Ok(())
    }
}
