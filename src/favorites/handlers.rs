use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ApiError;
use crate::session::{CurrentUser, Session};
use crate::state::AppState;

use super::set::FavoriteSet;

#[derive(Debug, Serialize)]
struct FavoriteToggled {
    recipe_id: Uuid,
    favorited: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites))
        .route("/recipes/:id/favorite", post(toggle_favorite))
}

/// Anonymous sessions see an empty list; a backend failure degrades the
/// same way so the catalog never waits on favorites.
#[instrument(skip(state, session))]
async fn list_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Json<Vec<Uuid>> {
    let Some(user) = session.user() else {
        return Json(Vec::new());
    };
    let set = FavoriteSet::load(state.backend.as_ref(), user.user_id).await;
    Json(set.recipe_ids())
}

#[instrument(skip(state, user))]
async fn toggle_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(recipe_id): Path<Uuid>,
) -> Result<Json<FavoriteToggled>, ApiError> {
    let mut set = FavoriteSet::load(state.backend.as_ref(), user.user_id).await;
    let favorited = set.toggle(state.backend.as_ref(), recipe_id).await?;
    Ok(Json(FavoriteToggled {
        recipe_id,
        favorited,
    }))
}
