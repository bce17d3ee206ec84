//! Board and panel entity model.
//!
//! Boards and panels carry the same attribute set, so both are expressed as
//! [`Equipment`] parameterised by their state enum. `Equipment<BoardState>` and
//! `Equipment<PanelState>` are distinct types and cannot be mixed up.
//!
//! An `Equipment` value always satisfies the entity invariants: it can only be
//! built through [`Equipment::new`] / [`Equipment::with_id`], and every mutation goes
//! through a validating setter or [`Equipment::apply`].

use crate::core::state::{BoardState, OperationalState, PanelState, parse_state};
use crate::core::validation::{
    self, BRAND_MAX_LEN, LOCATION_MAX_LEN, NAME_MAX_LEN, current_year,
    installed_after_manufactured, year_in_range,
};
use crate::errors::Result;
use uuid::Uuid;

/// Attribute set of a board or panel, without its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes<S> {
    /// Display name, 1..=200 characters
    pub name: String,
    /// Physical location, 1..=200 characters
    pub location: String,
    /// Manufacturer, at most 100 characters
    pub brand: Option<String>,
    /// Rated capacity in amps, strictly positive
    pub amperage_capacity: f64,
    /// Current operational state
    pub state: S,
    /// Year of manufacture
    pub year_manufactured: i32,
    /// Year of installation, never before `year_manufactured`
    pub year_installed: i32,
}

/// Partial update: every present field overwrites the corresponding attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentPatch<S> {
    /// New name
    pub name: Option<String>,
    /// New location
    pub location: Option<String>,
    /// New brand
    pub brand: Option<String>,
    /// New amperage capacity
    pub amperage_capacity: Option<f64>,
    /// New state
    pub state: Option<S>,
    /// New manufacture year
    pub year_manufactured: Option<i32>,
    /// New installation year
    pub year_installed: Option<i32>,
}

// Manual impl so `S` does not need to be `Default`.
impl<S> Default for EquipmentPatch<S> {
    fn default() -> Self {
        Self {
            name: None,
            location: None,
            brand: None,
            amperage_capacity: None,
            state: None,
            year_manufactured: None,
            year_installed: None,
        }
    }
}

/// A validated board or panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment<S> {
    id: Uuid,
    attrs: Attributes<S>,
}

/// An electronic board
pub type ElectronicBoard = Equipment<BoardState>;
/// An electronic panel
pub type ElectronicPanel = Equipment<PanelState>;

impl<S: OperationalState> Equipment<S> {
    /// Validates `attrs` and builds an entity with a freshly generated identifier.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Validation`] if any invariant is violated.
    pub fn new(attrs: Attributes<S>) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), attrs)
    }

    /// Validates `attrs` and builds an entity with a caller-chosen identifier.
    ///
    /// # Errors
    /// Returns [`crate::errors::Error::Validation`] if any invariant is violated.
    pub fn with_id(id: Uuid, attrs: Attributes<S>) -> Result<Self> {
        validation::validate_attributes(&attrs, current_year())?;
        Ok(Self { id, attrs })
    }

    /// Rebuilds an entity from stored data without re-running validation.
    ///
    /// Validation only happens at write time, so a stored record stays loadable
    /// even if the calendar has since moved on.
    pub(crate) fn restore(id: Uuid, attrs: Attributes<S>) -> Self {
        Self { id, attrs }
    }

    /// Unique identifier, immutable after creation
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.attrs.name
    }

    /// Physical location
    #[must_use]
    pub fn location(&self) -> &str {
        &self.attrs.location
    }

    /// Manufacturer, if known
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.attrs.brand.as_deref()
    }

    /// Rated capacity in amps
    #[must_use]
    pub const fn amperage_capacity(&self) -> f64 {
        self.attrs.amperage_capacity
    }

    /// Current operational state
    #[must_use]
    pub fn state(&self) -> S {
        self.attrs.state
    }

    /// Year of manufacture
    #[must_use]
    pub const fn year_manufactured(&self) -> i32 {
        self.attrs.year_manufactured
    }

    /// Year of installation
    /// Year of installation
    #[must_use]
    pub const fn year_installed(&self) -> i32 {
        self.attrs.year_installed
    }

    /// Splits the entity into its identifier and attributes.
    #[must_use]
    pub fn into_parts(self) -> (Uuid, Attributes<S>) {
        (self.id, self.attrs)
    }

    /// # Errors
    /// Returns a validation error if the name is blank or too long.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validation::required_text("name", &name, NAME_MAX_LEN)?;
        self.attrs.name = name;
        Ok(())
    }

    /// # Errors
    /// Returns a validation error if the location is blank or too long.
    pub fn set_location(&mut self, location: impl Into<String>) -> Result<()> {
        let location = location.into();
        validation::required_text("location", &location, LOCATION_MAX_LEN)?;
        self.attrs.location = location;
        Ok(())
    }

    /// # Errors
    /// Returns a validation error if the brand is too long.
    pub fn set_brand(&mut self, brand: Option<String>) -> Result<()> {
        validation::optional_text("brand", brand.as_deref(), BRAND_MAX_LEN)?;
        self.attrs.brand = brand;
        Ok(())
    }

    /// # Errors
    /// Returns a validation error unless the capacity is finite and positive.
    pub fn set_amperage_capacity(&mut self, amperage_capacity: f64) -> Result<()> {
        validation::positive_amperage(amperage_capacity)?;
        self.attrs.amperage_capacity = amperage_capacity;
        Ok(())
    }

    /// Any state may follow any other.
    pub fn set_state(&mut self, state: S) {
        self.attrs.state = state;
    }

    /// Coerces `raw` (case and whitespace insensitive) and assigns it.
    ///
    /// # Errors
    /// Returns a validation error listing the valid values when `raw` matches none.
    pub fn set_state_str(&mut self, raw: &str) -> Result<()> {
        self.attrs.state = parse_state(raw)?;
        Ok(())
    }

    /// Re-checks the ordering against the current `year_installed`.
    ///
    /// # Errors
    /// Returns a validation error if the year is out of range or after `year_installed`.
    pub fn set_year_manufactured(&mut self, year: i32) -> Result<()> {
        year_in_range("year_manufactured", year, current_year())?;
        installed_after_manufactured(year, self.attrs.year_installed)?;
        self.attrs.year_manufactured = year;
        Ok(())
    }

    /// Re-checks the ordering against the current `year_manufactured`.
    ///
    /// # Errors
    /// Returns a validation error if the year is out of range or before `year_manufactured`.
    pub fn set_year_installed(&mut self, year: i32) -> Result<()> {
        year_in_range("year_installed", year, current_year())?;
        installed_after_manufactured(self.attrs.year_manufactured, year)?;
        self.attrs.year_installed = year;
        Ok(())
    }

    /// Applies a partial update.
    ///
    /// Present fields are validated as they are staged on a copy; the ordering rule is
    /// then checked against the resulting whole object. The entity is only modified
    /// when every check passes, so both years may be moved together in one patch.
    ///
    /// # Errors
    /// Returns the first violated rule; `self` is left unchanged in that case.
    pub fn apply(&mut self, patch: EquipmentPatch<S>) -> Result<()> {
        let now = current_year();
        let mut staged = self.attrs.clone();

        if let Some(name) = patch.name {
            validation::required_text("name", &name, NAME_MAX_LEN)?;
            staged.name = name;
        }
        if let Some(location) = patch.location {
            validation::required_text("location", &location, LOCATION_MAX_LEN)?;
            staged.location = location;
        }
        if let Some(brand) = patch.brand {
            validation::optional_text("brand", Some(&brand), BRAND_MAX_LEN)?;
            staged.brand = Some(brand);
        }
        if let Some(amperage_capacity) = patch.amperage_capacity {
            validation::positive_amperage(amperage_capacity)?;
            staged.amperage_capacity = amperage_capacity;
        }
        if let Some(state) = patch.state {
            staged.state = state;
        }
        if let Some(year) = patch.year_manufactured {
            year_in_range("year_manufactured", year, now)?;
            staged.year_manufactured = year;
        }
        if let Some(year) = patch.year_installed {
            year_in_range("year_installed", year, now)?;
            staged.year_installed = year;
        }
        installed_after_manufactured(staged.year_manufactured, staged.year_installed)?;

        self.attrs = staged;
        Ok(())
    }
}
