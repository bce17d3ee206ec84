//! Request and response bodies for the board and panel endpoints.

use crate::core::state::OperationalState;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use uuid::Uuid;

/// Body of `POST /boards` and `POST /panels`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipmentResource {
    /// Display name
    pub name: String,
    /// Physical location
    pub location: String,
    /// Manufacturer, optional
    #[serde(default)]
    pub brand: Option<String>,
    /// Rated capacity in amps
    pub amperage_capacity: f64,
    /// Coerced case-insensitively; defaults to `operative` when absent
    #[serde(default)]
    pub state: Option<String>,
    /// Year of manufacture
    pub year_manufactured: i32,
    /// Year of installation
    pub year_installed: i32,
}

/// Body of `PUT /boards/{id}` and `PUT /panels/{id}`; only present fields are changed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateEquipmentResource {
    /// New name
    pub name: Option<String>,
    /// New location
    pub location: Option<String>,
    /// New brand; `null` leaves the stored value untouched
    pub brand: Option<String>,
    /// New capacity in amps
    pub amperage_capacity: Option<f64>,
    /// New state, coerced like on create
    pub state: Option<String>,
    /// New manufacture year
    pub year_manufactured: Option<i32>,
    /// New installation year
    pub year_installed: Option<i32>,
}

/// A board or panel as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentResource<S> {
    /// Server-generated identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Physical location
    pub location: String,
    /// Manufacturer, `null` when unknown
    pub brand: Option<String>,
    /// Rated capacity in amps
    pub amperage_capacity: f64,
    /// Canonical lowercase state
    pub state: S,
    /// Year of manufacture
    pub year_manufactured: i32,
    /// Year of installation
    pub year_installed: i32,
}

/// Collection response, keyed `boards` or `panels` depending on `S`
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentListResource<S> {
    /// Every stored entity
    pub items: Vec<EquipmentResource<S>>,
    /// Number of entries in `items`
    pub total: usize,
}

impl<S: OperationalState> Serialize for EquipmentListResource<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(S::COLLECTION, &self.items)?;
        map.serialize_entry("total", &self.total)?;
        map.end()
    }
}
