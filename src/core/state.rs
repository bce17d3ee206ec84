//! Operational state value objects for boards and panels.
//!
//! Both enums share the same three values but are independent types, so a panel
//! state can never end up stored on a board. Transitions are unrestricted: any
//! value may replace any other.

use crate::errors::{Error, Result};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behaviour shared by the per-entity state enums.
///
/// The implementing type also acts as the marker for which inventory entity an
/// [`Equipment`](crate::core::equipment::Equipment) is.
pub trait OperationalState:
    Copy + Eq + fmt::Debug + Default + Serialize + Send + Sync + 'static
{
    /// Every valid value, in declaration order.
    const ALL: [Self; 3];
    /// Human-readable name of the entity this state belongs to.
    const ENTITY: &'static str;
    /// Plural key used for collections on the wire.
    const COLLECTION: &'static str;

    /// Canonical lowercase string for this value.
    fn as_str(self) -> &'static str;
}

/// Comma separated list of the canonical values, used in error messages.
fn valid_values<S: OperationalState>() -> String {
    S::ALL
        .iter()
        .map(|state| state.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Coerces a raw string into a state value.
///
/// Surrounding whitespace is ignored and matching is case-insensitive.
///
/// # Errors
/// Returns [`Error::Validation`] listing the valid values when nothing matches.
pub fn parse_state<S: OperationalState>(raw: &str) -> Result<S> {
    let normalized = raw.trim().to_lowercase();
    S::ALL
        .into_iter()
        .find(|state| state.as_str() == normalized)
        .ok_or_else(|| {
            Error::validation(
                "state",
                format!("Invalid state '{raw}'. Valid values: {}", valid_values::<S>()),
            )
        })
}

/// Operational state of an electronic board
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum BoardState {
    /// Functioning normally
    #[default]
    #[sea_orm(string_value = "operative")]
    Operative,
    /// Under maintenance
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    /// Out of service
    #[sea_orm(string_value = "out_of_service")]
    OutOfService,
}

impl OperationalState for BoardState {
    const ALL: [Self; 3] = [Self::Operative, Self::Maintenance, Self::OutOfService];
    const ENTITY: &'static str = "Electronic board";
    const COLLECTION: &'static str = "boards";

    fn as_str(self) -> &'static str {
        match self {
            Self::Operative => "operative",
            Self::Maintenance => "maintenance",
            Self::OutOfService => "out_of_service",
        }
    }
}

impl FromStr for BoardState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_state(s)
    }
}

/// Operational state of an electronic panel
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    /// Functioning normally
    #[default]
    #[sea_orm(string_value = "operative")]
    Operative,
    /// Under maintenance
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    /// Out of service
    #[sea_orm(string_value = "out_of_service")]
    OutOfService,
}

impl OperationalState for PanelState {
    const ALL: [Self; 3] = [Self::Operative, Self::Maintenance, Self::OutOfService];
    const ENTITY: &'static str = "Electronic panel";
    const COLLECTION: &'static str = "panels";

    fn as_str(self) -> &'static str {
        match self {
            Self::Operative => "operative",
            Self::Maintenance => "maintenance",
            Self::OutOfService => "out_of_service",
        }
    }
}

impl FromStr for PanelState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_state(s)
    }
}
