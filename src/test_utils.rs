//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and building entities with
//! sensible defaults.

use crate::{
    config::database::create_tables,
    core::{
        equipment::Attributes,
        state::{BoardState, PanelState},
    },
    errors::Result,
    repository::{SeaOrmBoardRepository, SeaOrmPanelRepository},
    service::{BoardService, PanelService},
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a debug-level subscriber that writes through the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
///
/// The pool is capped at one connection: every new in-memory connection
/// would otherwise open its own empty database.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// A valid board: manufactured 2020, installed 2021, 400 A, Siemens.
pub fn board_attributes() -> Attributes<BoardState> {
    Attributes {
        name: "Main Distribution Panel".to_string(),
        location: "Building A - Basement".to_string(),
        brand: Some("Siemens".to_string()),
        amperage_capacity: 400.0,
        state: BoardState::Operative,
        year_manufactured: 2020,
        year_installed: 2021,
    }
}

/// A valid panel: manufactured 2018, installed 2019, 225 A, Schneider Electric.
pub fn panel_attributes() -> Attributes<PanelState> {
    Attributes {
        name: "Lighting Panel L1".to_string(),
        location: "Building B - Floor 1".to_string(),
        brand: Some("Schneider Electric".to_string()),
        amperage_capacity: 225.0,
        state: PanelState::Operative,
        year_manufactured: 2018,
        year_installed: 2019,
    }
}

/// Board service over a fresh in-memory database.
pub async fn board_service() -> Result<BoardService> {
    let db = setup_test_db().await?;
    Ok(BoardService::new(Arc::new(SeaOrmBoardRepository::new(db))))
}

/// Panel service over a fresh in-memory database.
pub async fn panel_service() -> Result<PanelService> {
    let db = setup_test_db().await?;
    Ok(PanelService::new(Arc::new(SeaOrmPanelRepository::new(db))))
}
