use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::backend::BackendClient;

/// Recipe ids the user has marked favorite: the server-fetched marks
/// merged with this session's toggles. Favorites are secondary content,
/// so loading degrades instead of failing.
pub struct FavoriteSet {
    user_id: Uuid,
    ids: HashSet<Uuid>,
}

impl FavoriteSet {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            ids: HashSet::new(),
        }
    }

    /// Fetch the user's marks. On a backend error this logs and yields
    /// the empty set — favorites must never block catalog rendering.
    pub async fn load(backend: &dyn BackendClient, user_id: Uuid) -> Self {
        match backend.list_favorites(user_id).await {
            Ok(ids) => Self {
                user_id,
                ids: ids.into_iter().collect(),
            },
            Err(e) => {
                warn!(error = %e, %user_id, "failed to load favorites, rendering none");
                Self::empty(user_id)
            }
        }
    }

    pub fn contains(&self, recipe_id: Uuid) -> bool {
        self.ids.contains(&recipe_id)
    }

    pub fn recipe_ids(&self) -> Vec<Uuid> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip the mark for `recipe_id`, returning the new marked state.
    ///
    /// Marking waits for the backend: on failure the local set is left
    /// unchanged and the error surfaces. Unmarking is optimistic — the
    /// local mark is cleared first and stays cleared even if the delete
    /// call fails; the next load reconciles.
    pub async fn toggle(
        &mut self,
        backend: &dyn BackendClient,
        recipe_id: Uuid,
    ) -> anyhow::Result<bool> {
        if self.ids.contains(&recipe_id) {
            self.ids.remove(&recipe_id);
            if let Err(e) = backend.remove_favorite(self.user_id, recipe_id).await {
                warn!(
                    error = %e,
                    user_id = %self.user_id,
                    %recipe_id,
                    "favorite delete failed, local mark already cleared"
                );
            }
            Ok(false)
        } else {
            backend.add_favorite(self.user_id, recipe_id).await?;
            self.ids.insert(recipe_id);
            Ok(true)
        }
    }
}
