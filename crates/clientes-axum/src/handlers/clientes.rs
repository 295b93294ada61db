//! Cliente handlers - the `/clientes` resource.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, StatusCode, header};
use clientes_core::contracts::http::clientes::cliente_location;
use clientes_core::{ClienteDto, ClienteFilter, CreateClienteDto, RawPatchOperation};
use uuid::Uuid;

use crate::error::HttpError;
use crate::state::AppState;

/// Ids that do not parse can never match a row, so they are simply absent.
fn parse_id(raw: &str) -> Result<Uuid, HttpError> {
    Uuid::parse_str(raw).map_err(|_| HttpError::NotFound)
}

/// Create a customer.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateClienteDto>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ClienteDto>), HttpError> {
    let Json(input) = payload?;
    let created = state
        .service
        .create(input.clone())
        .await
        .map_err(|e| HttpError::from_service(e, StatusCode::BAD_REQUEST, "create_cliente", &input))?;

    let location = cliente_location(created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// List customers, optionally filtered by name and paged.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ClienteFilter>, QueryRejection>,
) -> Result<Json<Vec<ClienteDto>>, HttpError> {
    let Query(filter) = query?;
    let clientes = state
        .service
        .list(&filter)
        .await
        .map_err(|e| HttpError::from_service(e, StatusCode::BAD_REQUEST, "list_clientes", &filter))?;
    Ok(Json(clientes))
}

/// Get one customer.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClienteDto>, HttpError> {
    let id = parse_id(&id)?;
    let cliente = state
        .service
        .get(id)
        .await
        .map_err(|e| HttpError::from_service(e, StatusCode::BAD_REQUEST, "get_cliente", &id))?;
    Ok(Json(cliente))
}

/// Delete one customer.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id(&id)?;
    state
        .service
        .delete(id)
        .await
        .map_err(|e| HttpError::from_service(e, StatusCode::BAD_REQUEST, "delete_cliente", &id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply a patch document to one customer.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Vec<RawPatchOperation>>, JsonRejection>,
) -> Result<StatusCode, HttpError> {
    let id = parse_id(&id)?;
    let operations = match payload {
        Ok(Json(operations)) => operations,
        Err(rejection) => {
            // An unknown id is reported before a malformed body.
            state.service.get(id).await.map_err(|e| {
                HttpError::from_service(e, StatusCode::UNPROCESSABLE_ENTITY, "patch_cliente", &id)
            })?;
            return Err(rejection.into());
        }
    };
    state
        .service
        .patch(id, &operations)
        .await
        .map_err(|e| {
            HttpError::from_service(
                e,
                StatusCode::UNPROCESSABLE_ENTITY,
                "patch_cliente",
                &(id, &operations),
            )
        })?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_ids_are_not_found() {
        assert!(matches!(parse_id("not-a-uuid"), Err(HttpError::NotFound)));
        assert!(matches!(parse_id(""), Err(HttpError::NotFound)));

        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
