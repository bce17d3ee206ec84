//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod electronic_board;
pub mod electronic_panel;

// Re-export specific types to avoid conflicts
pub use electronic_board::{
    Entity as ElectronicBoardEntity, Model as ElectronicBoardModel,
};
pub use electronic_panel::{
    Entity as ElectronicPanelEntity, Model as ElectronicPanelModel,
};
