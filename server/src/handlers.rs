use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use shared_types::{EntryPayload, SearchQuery};
use sqlx::SqlitePool;

use crate::db::repository;
use crate::error::ApiError;
use crate::geo;

/// Wire every route to its handler. The pool travels as axum state so
/// handlers never reach for a global connection.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(list_entries).put(create_entry))
        .route("/search/", post(search_entries))
        .route(
            "/:id/",
            get(get_entry).patch(update_entry).delete(delete_entry),
        )
        .with_state(pool)
}

async fn list_entries(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, ApiError> {
    let entries = repository::get_all_entries(&pool).await?;
    tracing::info!("listed {} addressbook entries", entries.len());
    Ok(Json(entries))
}

/// Radius search: bounding box first, then the range filter. An empty
/// result surfaces as the "No data found" response, same wording as a
/// missing id.
async fn search_entries(
    State(pool): State<SqlitePool>,
    Json(search): Json<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let bounds = geo::bounding_box(search.latitude, search.longitude, search.radius as f64);
    let entries = repository::find_in_range(&pool, &bounds).await?;

    if entries.is_empty() {
        tracing::info!(
            "no addressbook entries within {}km of [{}, {}]",
            search.radius,
            search.latitude,
            search.longitude
        );
        return Err(ApiError::NotFound);
    }

    tracing::info!(
        "found {} addressbook entries within {}km of [{}, {}]",
        entries.len(),
        search.radius,
        search.latitude,
        search.longitude
    );
    Ok(Json(json!({ "data": entries })))
}

async fn get_entry(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = repository::get_entry_by_id(&pool, id).await?;
    tracing::info!("fetched addressbook entry {id}");
    Ok(Json(json!({ "data": entry })))
}

async fn create_entry(
    State(pool): State<SqlitePool>,
    Json(payload): Json<EntryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = repository::insert_entry(&pool, &payload).await?;
    tracing::info!("created addressbook entry {id} for {}", payload.name);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "SUCCESS", "id": id })),
    ))
}

async fn update_entry(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<EntryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    repository::update_entry(&pool, id, &payload).await?;
    tracing::info!("updated addressbook entry {id}");
    Ok(Json(json!({ "message": "SUCCESS" })))
}

async fn delete_entry(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    repository::delete_entry(&pool, id).await?;
    tracing::info!("deleted addressbook entry {id}");
    Ok(Json(json!({ "message": "SUCCESS" })))
}
