//! Conversions between wire resources and domain entities.

use crate::{
    api::resources::{
        CreateEquipmentResource, EquipmentListResource, EquipmentResource,
        UpdateEquipmentResource,
    },
    core::{
        equipment::{Attributes, Equipment, EquipmentPatch},
        state::{OperationalState, parse_state},
    },
    errors::Result,
};

/// Flattens an entity into its wire form.
#[must_use]
pub fn to_resource<S: OperationalState>(entity: Equipment<S>) -> EquipmentResource<S> {
    let (id, attrs) = entity.into_parts();
    EquipmentResource {
        id,
        name: attrs.name,
        location: attrs.location,
        brand: attrs.brand,
        amperage_capacity: attrs.amperage_capacity,
        state: attrs.state,
        year_manufactured: attrs.year_manufactured,
        year_installed: attrs.year_installed,
    }
}

/// Wraps entities in the keyed collection response.
#[must_use]
pub fn to_resource_list<S: OperationalState>(
    entities: Vec<Equipment<S>>,
) -> EquipmentListResource<S> {
    let items: Vec<_> = entities.into_iter().map(to_resource).collect();
    EquipmentListResource {
        total: items.len(),
        items,
    }
}

/// Builds a validated entity with a fresh identifier from a create body.
///
/// # Errors
/// Returns a validation error for an unknown state or any violated invariant.
pub fn to_entity<S: OperationalState>(resource: CreateEquipmentResource) -> Result<Equipment<S>> {
    let state = resource
        .state
        .as_deref()
        .map(parse_state::<S>)
        .transpose()?
        .unwrap_or_default();

    Equipment::new(Attributes {
        name: resource.name,
        location: resource.location,
        brand: resource.brand,
        amperage_capacity: resource.amperage_capacity,
        state,
        year_manufactured: resource.year_manufactured,
        year_installed: resource.year_installed,
    })
}

/// Converts an update body into a patch, coercing the state string if present.
///
/// # Errors
/// Returns a validation error for an unknown state.
pub fn to_patch<S: OperationalState>(resource: UpdateEquipmentResource) -> Result<EquipmentPatch<S>> {
    let state = resource.state.as_deref().map(parse_state::<S>).transpose()?;
    Ok(EquipmentPatch {
        name: resource.name,
        location: resource.location,
        brand: resource.brand,
        amperage_capacity: resource.amperage_capacity,
        state,
        year_manufactured: resource.year_manufactured,
        year_installed: resource.year_installed,
    })
}
