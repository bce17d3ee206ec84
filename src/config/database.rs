//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::{ElectronicBoardEntity, ElectronicPanelEntity};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{info, instrument};

/// Connects to the database at `database_url`.
///
/// # Errors
/// Returns [`crate::errors::Error::Database`] if the connection cannot be established.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the board and panel tables if they do not exist yet.
///
/// Safe to run on every startup.
///
/// # Errors
/// Returns [`crate::errors::Error::Database`] if a statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut board_table = schema.create_table_from_entity(ElectronicBoardEntity);
    let mut panel_table = schema.create_table_from_entity(ElectronicPanelEntity);

    board_table.if_not_exists();
    panel_table.if_not_exists();

    db.execute(builder.build(&board_table)).await?;
    db.execute(builder.build(&panel_table)).await?;

    info!("Database tables ensured (electronic_boards, electronic_panels).");
    Ok(())
}
