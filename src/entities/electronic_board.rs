//! Electronic board entity - One physical distribution board installed at a site.

use crate::core::state::BoardState;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Electronic board database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "electronic_boards")]
pub struct Model {
    /// Unique identifier, generated on creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name of the board
    pub name: String,
    /// Physical location (building, floor, room)
    pub location: String,
    /// Manufacturer, if known
    pub brand: Option<String>,
    /// Rated capacity in amps
    pub amperage_capacity: f64,
    /// Current operational state
    pub state: BoardState,
    /// Year the board was manufactured
    pub year_manufactured: i32,
    /// Year the board was installed
    pub year_installed: i32,
}

/// Electronic boards have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
