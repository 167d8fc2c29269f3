//! Seam to the hosted data backend. Every table read or write in the
//! application goes through [`BackendClient`]; the rest of the code never
//! sees SQL or the pool.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{
    Category, CategoryInput, ContentUpdate, ContentUpdateInput, Profile, Recipe, RecipeInput,
    UserAccount,
};

mod pg;
mod rows;

#[cfg(test)]
mod fake;

pub use pg::Backend;

#[cfg(test)]
pub use fake::FakeBackend;

#[async_trait]
pub trait BackendClient: Send + Sync {
    // Catalog reads. `list_recipes` returns the full snapshot newest first.
    async fn list_recipes(&self) -> anyhow::Result<Vec<Recipe>>;
    async fn get_recipe(&self, id: Uuid) -> anyhow::Result<Option<Recipe>>;
    async fn list_categories(&self) -> anyhow::Result<Vec<Category>>;
    async fn list_published_updates(&self) -> anyhow::Result<Vec<ContentUpdate>>;

    // Favorite marks, keyed by (user, recipe).
    async fn list_favorites(&self, user_id: Uuid) -> anyhow::Result<Vec<Uuid>>;
    async fn add_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> anyhow::Result<()>;
    async fn remove_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> anyhow::Result<()>;

    // Session resolution.
    async fn get_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>>;
    async fn is_admin(&self, user_id: Uuid) -> anyhow::Result<bool>;

    // Back-office writes.
    async fn create_recipe(&self, input: RecipeInput) -> anyhow::Result<Recipe>;
    async fn update_recipe(&self, id: Uuid, input: RecipeInput)
        -> anyhow::Result<Option<Recipe>>;
    async fn delete_recipe(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn create_category(&self, input: CategoryInput) -> anyhow::Result<Category>;
    async fn update_category(
        &self,
        id: Uuid,
        input: CategoryInput,
    ) -> anyhow::Result<Option<Category>>;
    async fn delete_category(&self, id: Uuid) -> anyhow::Result<bool>;

    async fn list_accounts(&self) -> anyhow::Result<Vec<UserAccount>>;
    async fn set_profile_active(
        &self,
        user_id: Uuid,
        active: bool,
    ) -> anyhow::Result<Option<Profile>>;

    async fn list_content_updates(&self) -> anyhow::Result<Vec<ContentUpdate>>;
    async fn create_content_update(
        &self,
        created_by: Uuid,
        input: ContentUpdateInput,
    ) -> anyhow::Result<ContentUpdate>;
    async fn edit_content_update(
        &self,
        id: Uuid,
        input: ContentUpdateInput,
    ) -> anyhow::Result<Option<ContentUpdate>>;
    async fn delete_content_update(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn set_update_published(
        &self,
        id: Uuid,
        published: bool,
    ) -> anyhow::Result<Option<ContentUpdate>>;
}
