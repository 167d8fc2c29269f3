use crate::backend::BackendClient;
use crate::model::Recipe;

use super::filter::{filter, FilterCriteria};

/// One-shot snapshot of the recipe catalog, fetched on view entry in the
/// backend's newest-first order and never re-sorted locally.
pub struct CatalogStore {
    recipes: Vec<Recipe>,
}

impl CatalogStore {
    /// Snapshot load. This is primary content: errors propagate to the
    /// caller instead of degrading silently.
    pub async fn load(backend: &dyn BackendClient) -> anyhow::Result<Self> {
        let recipes = backend.list_recipes().await?;
        Ok(Self { recipes })
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The subset currently visible under `criteria`, in snapshot order.
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<&Recipe> {
        filter(&self.recipes, criteria)
    }
}
