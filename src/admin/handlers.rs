use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{
    Category, CategoryInput, ContentUpdate, ContentUpdateInput, Profile, Recipe, RecipeInput,
    UserAccount,
};
use crate::session::AdminUser;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/admin/recipes/:id",
            put(update_recipe).delete(delete_recipe),
        )
        .route(
            "/admin/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/admin/categories/:id",
            put(update_category).delete(delete_category),
        )
        .route("/admin/users", get(list_users))
        .route("/admin/users/:id/active", put(set_user_active))
        .route("/admin/updates", get(list_updates).post(create_update))
        .route(
            "/admin/updates/:id",
            put(edit_update).delete(delete_update),
        )
        .route("/admin/updates/:id/published", put(set_update_published))
}

// --- recipes ---

#[instrument(skip(state))]
async fn list_recipes(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.backend.list_recipes().await?))
}

#[instrument(skip(state, input))]
async fn create_recipe(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let recipe = state.backend.create_recipe(input).await?;
    info!(recipe_id = %recipe.id, admin = %admin.user_id, "recipe created");
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[instrument(skip(state, input))]
async fn update_recipe(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state
        .backend
        .update_recipe(id, input)
        .await?
        .ok_or(ApiError::NotFound("recipe"))?;
    info!(recipe_id = %id, admin = %admin.user_id, "recipe updated");
    Ok(Json(recipe))
}

#[instrument(skip(state))]
async fn delete_recipe(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.backend.delete_recipe(id).await? {
        return Err(ApiError::NotFound("recipe"));
    }
    info!(recipe_id = %id, admin = %admin.user_id, "recipe deleted");
    Ok(StatusCode::NO_CONTENT)
}

// --- categories ---

#[instrument(skip(state))]
async fn list_categories(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.backend.list_categories().await?))
}

#[instrument(skip(state, input))]
async fn create_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = state.backend.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[instrument(skip(state, input))]
async fn update_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .backend
        .update_category(id, input)
        .await?
        .ok_or(ApiError::NotFound("category"))?;
    Ok(Json(category))
}

#[instrument(skip(state))]
async fn delete_category(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.backend.delete_category(id).await? {
        return Err(ApiError::NotFound("category"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- users ---

#[instrument(skip(state))]
async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<UserAccount>>, ApiError> {
    Ok(Json(state.backend.list_accounts().await?))
}

#[derive(Debug, Deserialize)]
struct SetActiveBody {
    active: bool,
}

/// Sets the flag to the requested value; repeated calls are idempotent.
#[instrument(skip(state))]
async fn set_user_active(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SetActiveBody>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .backend
        .set_profile_active(id, body.active)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    info!(user_id = %id, admin = %admin.user_id, active = body.active, "account status changed");
    Ok(Json(profile))
}

// --- content updates ---

#[instrument(skip(state))]
async fn list_updates(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<ContentUpdate>>, ApiError> {
    Ok(Json(state.backend.list_content_updates().await?))
}

#[instrument(skip(state, input))]
async fn create_update(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(input): Json<ContentUpdateInput>,
) -> Result<(StatusCode, Json<ContentUpdate>), ApiError> {
    let update = state
        .backend
        .create_content_update(admin.user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(update)))
}

#[instrument(skip(state, input))]
async fn edit_update(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(input): Json<ContentUpdateInput>,
) -> Result<Json<ContentUpdate>, ApiError> {
    let update = state
        .backend
        .edit_content_update(id, input)
        .await?
        .ok_or(ApiError::NotFound("content update"))?;
    Ok(Json(update))
}

#[instrument(skip(state))]
async fn delete_update(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.backend.delete_content_update(id).await? {
        return Err(ApiError::NotFound("content update"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct SetPublishedBody {
    published: bool,
}

#[instrument(skip(state))]
async fn set_update_published(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SetPublishedBody>,
) -> Result<Json<ContentUpdate>, ApiError> {
    let update = state
        .backend
        .set_update_published(id, body.published)
        .await?
        .ok_or(ApiError::NotFound("content update"))?;
    Ok(Json(update))
}
