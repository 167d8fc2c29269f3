use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{Category, ContentUpdate, Recipe};
use crate::state::AppState;

use super::filter::FilterCriteria;
use super::store::CatalogStore;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/:id", get(get_recipe))
        .route("/categories", get(list_categories))
        .route("/updates", get(list_published_updates))
}

#[instrument(skip(state))]
async fn list_recipes(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let store = CatalogStore::load(state.backend.as_ref()).await?;
    let visible: Vec<Recipe> = store
        .visible(&criteria)
        .into_iter()
        .cloned()
        .collect();
    debug!(total = store.len(), visible = visible.len(), "catalog filtered");
    Ok(Json(visible))
}

#[instrument(skip(state))]
async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state
        .backend
        .get_recipe(id)
        .await?
        .ok_or(ApiError::NotFound("recipe"))?;
    Ok(Json(recipe))
}

#[instrument(skip(state))]
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.backend.list_categories().await?))
}

#[instrument(skip(state))]
async fn list_published_updates(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentUpdate>>, ApiError> {
    Ok(Json(state.backend.list_published_updates().await?))
}
