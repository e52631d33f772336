use crate::body::{decode_fresh, decode_patch};
use crate::errors::ApiError;
use crate::models::{ListQuery, UpdateMode};
use crate::pagination::{calculate_content_range, parse_range};
use crate::traits::RestResource;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// State shared by the five handlers of one bound collection.
#[derive(Clone)]
pub struct CollectionState {
    pub db: DatabaseConnection,
    pub resource: Arc<str>,
    pub update_mode: UpdateMode,
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::invalid_id(raw))
}

/// `POST {path}`: decode the body into a fresh model and save it.
pub async fn create_one<T>(
    State(state): State<CollectionState>,
    body: Bytes,
) -> Result<Json<T>, ApiError>
where
    T: RestResource,
{
    let model: T = decode_fresh(&body)?;
    let saved = T::save(&state.db, model)
        .await
        .map_err(ApiError::database)?;
    tracing::debug!(resource = %state.resource, "record created");
    Ok(Json(saved))
}

/// `GET {path}`: every record, or one page of them when `range` is given.
pub async fn get_all<T>(
    Query(params): Query<ListQuery>,
    State(state): State<CollectionState>,
) -> Result<(HeaderMap, Json<Vec<T>>), ApiError>
where
    T: RestResource,
{
    let Some(range) = params.range.as_deref() else {
        let items = T::find_all(&state.db).await.map_err(ApiError::database)?;
        return Ok((HeaderMap::new(), Json(items)));
    };

    let (offset, limit) = parse_range(range);
    let items = T::find_page(&state.db, offset, limit)
        .await
        .map_err(ApiError::database)?;
    let total_count = T::count(&state.db).await.map_err(ApiError::database)?;
    tracing::debug!(resource = %state.resource, offset, limit, total_count, "page listed");

    let headers = calculate_content_range(offset, limit, total_count, &state.resource);
    Ok((headers, Json(items)))
}

/// `GET {path}/{id}`
pub async fn get_one<T>(
    State(state): State<CollectionState>,
    Path(raw_id): Path<String>,
) -> Result<Json<T>, ApiError>
where
    T: RestResource,
{
    let id = parse_id(&raw_id)?;
    T::find_by_id(&state.db, id)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_db(err, &state.resource, Some(id)))
}

/// `PUT {path}/{id}`: overwrite the record, or patch it in merge mode.
pub async fn update_one<T>(
    State(state): State<CollectionState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<bool>, ApiError>
where
    T: RestResource,
{
    let id = parse_id(&raw_id)?;
    let model: T = match state.update_mode {
        UpdateMode::Replace => decode_fresh(&body)?,
        UpdateMode::Merge => {
            let existing = T::find_by_id(&state.db, id)
                .await
                .map_err(|err| ApiError::from_db(err, &state.resource, Some(id)))?;
            decode_patch(&existing, &body)?
        }
    };

    T::update_by_id(&state.db, id, model)
        .await
        .map_err(|err| ApiError::from_db(err, &state.resource, Some(id)))?;
    tracing::debug!(resource = %state.resource, id, mode = ?state.update_mode, "record updated");
    Ok(Json(true))
}

/// `DELETE {path}/{id}`
pub async fn delete_one<T>(
    State(state): State<CollectionState>,
    Path(raw_id): Path<String>,
) -> Result<Json<bool>, ApiError>
where
    T: RestResource,
{
    let id = parse_id(&raw_id)?;
    T::delete_by_id(&state.db, id)
        .await
        .map_err(|err| ApiError::from_db(err, &state.resource, Some(id)))?;
    tracing::debug!(resource = %state.resource, id, "record deleted");
    Ok(Json(true))
}
