//! Session identity resolved from tokens issued by the hosted auth
//! provider. Login and credential management happen over there; this
//! module only verifies what it minted and looks up the caller's
//! profile and role.

mod extractors;
mod verifier;

pub use extractors::AdminUser;
pub use verifier::{Claims, JwtVerifier};

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::backend::BackendClient;
use crate::error::ApiError;
use crate::state::AppState;

/// Capability resolved once per session from `admin_users` row-presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub is_premium: bool,
}

/// The caller's identity for one request. Handlers receive this
/// explicitly instead of re-reading ambient auth state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Session {
    Anonymous,
    Authenticated { user: CurrentUser },
}

impl Session {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user } => Some(user),
        }
    }
}

/// Turns verified claims into a [`CurrentUser`] by consulting the
/// backend's `profiles` and `admin_users` tables. A deactivated profile
/// cannot authenticate; a missing profile row degrades to non-premium
/// defaults.
pub async fn resolve(
    backend: &dyn BackendClient,
    claims: Claims,
) -> Result<CurrentUser, ApiError> {
    let profile = backend.get_profile(claims.sub).await?;
    if let Some(profile) = &profile {
        if !profile.is_active {
            return Err(ApiError::AccountDisabled);
        }
    }

    let role = if backend.is_admin(claims.sub).await? {
        Role::Admin
    } else {
        Role::User
    };

    Ok(CurrentUser {
        user_id: claims.sub,
        email: claims.email,
        role,
        is_premium: profile.map(|p| p.is_premium).unwrap_or(false),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/session", get(get_session))
}

#[instrument(skip_all)]
async fn get_session(session: Session) -> Json<Session> {
    Json(session)
}
