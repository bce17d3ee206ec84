//! Board and panel route handlers.
//!
//! Handlers are generic over the state enum; the router instantiates them once
//! for `/boards` and once for `/panels`.

use crate::{
    api::{
        assembler,
        error::ApiResult,
        extractors::{ValidJson, ValidUuid},
        resources::{
            CreateEquipmentResource, EquipmentListResource, EquipmentResource,
            UpdateEquipmentResource,
        },
    },
    core::state::OperationalState,
    errors::Error,
    service::EquipmentService,
};
use axum::{Json, extract::State, http::StatusCode};

/// POST /{collection} - Create a new entity; validation happens in the domain model
pub async fn create_equipment<S: OperationalState>(
    State(service): State<EquipmentService<S>>,
    ValidJson(body): ValidJson<CreateEquipmentResource>,
) -> ApiResult<(StatusCode, Json<EquipmentResource<S>>)> {
    let entity = assembler::to_entity(body)?;
    let created = service.create(entity).await?;
    Ok((StatusCode::CREATED, Json(assembler::to_resource(created))))
}

/// GET /{collection} - List every stored entity
pub async fn list_equipment<S: OperationalState>(
    State(service): State<EquipmentService<S>>,
) -> ApiResult<Json<EquipmentListResource<S>>> {
    let entities = service.list().await?;
    Ok(Json(assembler::to_resource_list(entities)))
}

/// GET /{collection}/{id} - Fetch one entity
pub async fn get_equipment<S: OperationalState>(
    State(service): State<EquipmentService<S>>,
    ValidUuid(id): ValidUuid,
) -> ApiResult<Json<EquipmentResource<S>>> {
    let entity = service.get(id).await?.ok_or(Error::NotFound {
        entity: S::ENTITY,
        id,
    })?;
    Ok(Json(assembler::to_resource(entity)))
}

/// PUT /{collection}/{id} - Partial update, only provided fields change
pub async fn update_equipment<S: OperationalState>(
    State(service): State<EquipmentService<S>>,
    ValidUuid(id): ValidUuid,
    ValidJson(body): ValidJson<UpdateEquipmentResource>,
) -> ApiResult<Json<EquipmentResource<S>>> {
    let patch = assembler::to_patch(body)?;
    let updated = service.update(id, patch).await?;
    Ok(Json(assembler::to_resource(updated)))
}

/// DELETE /{collection}/{id}
pub async fn delete_equipment<S: OperationalState>(
    State(service): State<EquipmentService<S>>,
    ValidUuid(id): ValidUuid,
) -> ApiResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
