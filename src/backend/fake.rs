use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::BackendClient;
use crate::model::{
    Category, CategoryInput, ContentUpdate, ContentUpdateInput, Profile, Recipe, RecipeInput,
    UserAccount,
};

#[derive(Default)]
struct Inner {
    recipes: Vec<Recipe>,
    categories: Vec<Category>,
    profiles: Vec<Profile>,
    admins: HashSet<Uuid>,
    favorites: Vec<(Uuid, Uuid)>,
    updates: Vec<ContentUpdate>,
    fail_recipes: bool,
    fail_favorites: bool,
}

/// In-memory stand-in for the hosted backend, with switchable failure
/// injection for the error paths.
#[derive(Default)]
pub struct FakeBackend {
    inner: Mutex<Inner>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        self.inner.lock().unwrap().recipes = recipes;
        self
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.inner.lock().unwrap().profiles.push(profile);
        self
    }

    pub fn with_admin(self, user_id: Uuid) -> Self {
        self.inner.lock().unwrap().admins.insert(user_id);
        self
    }

    pub fn with_favorite(self, user_id: Uuid, recipe_id: Uuid) -> Self {
        self.inner.lock().unwrap().favorites.push((user_id, recipe_id));
        self
    }

    pub fn fail_recipes(self) -> Self {
        self.inner.lock().unwrap().fail_recipes = true;
        self
    }

    pub fn fail_favorites(self) -> Self {
        self.inner.lock().unwrap().fail_favorites = true;
        self
    }

    /// Marks currently persisted on the fake side, in insertion order.
    pub fn favorite_pairs(&self) -> Vec<(Uuid, Uuid)> {
        self.inner.lock().unwrap().favorites.clone()
    }
}

#[async_trait]
impl BackendClient for FakeBackend {
    async fn list_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_recipes {
            anyhow::bail!("recipes unavailable");
        }
        Ok(inner.recipes.clone())
    }

    async fn get_recipe(&self, id: Uuid) -> anyhow::Result<Option<Recipe>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_recipes {
            anyhow::bail!("recipes unavailable");
        }
        Ok(inner.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_categories(&self) -> anyhow::Result<Vec<Category>> {
        Ok(self.inner.lock().unwrap().categories.clone())
    }

    async fn list_published_updates(&self) -> anyhow::Result<Vec<ContentUpdate>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .updates
            .iter()
            .filter(|u| u.published)
            .cloned()
            .collect())
    }

    async fn list_favorites(&self, user_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_favorites {
            anyhow::bail!("favorites unavailable");
        }
        Ok(inner
            .favorites
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, r)| *r)
            .collect())
    }

    async fn add_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_favorites {
            anyhow::bail!("favorites unavailable");
        }
        if !inner.favorites.contains(&(user_id, recipe_id)) {
            inner.favorites.push((user_id, recipe_id));
        }
        Ok(())
    }

    async fn remove_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_favorites {
            anyhow::bail!("favorites unavailable");
        }
        inner.favorites.retain(|pair| *pair != (user_id, recipe_id));
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.profiles.iter().find(|p| p.id == user_id).cloned())
    }

    async fn is_admin(&self, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.inner.lock().unwrap().admins.contains(&user_id))
    }

    async fn create_recipe(&self, input: RecipeInput) -> anyhow::Result<Recipe> {
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            category: input.category,
            image_url: input.image_url,
            prep_time: input.prep_time,
            difficulty: input.difficulty,
            is_premium: input.is_premium,
            rating: input.rating,
            ingredients: input.ingredients,
            instructions: input.instructions,
            nutritional_info: input.nutritional_info,
            created_at: OffsetDateTime::now_utc(),
        };
        self.inner.lock().unwrap().recipes.insert(0, recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(
        &self,
        id: Uuid,
        input: RecipeInput,
    ) -> anyhow::Result<Option<Recipe>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(recipe) = inner.recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        recipe.title = input.title;
        recipe.description = input.description;
        recipe.category = input.category;
        recipe.image_url = input.image_url;
        recipe.prep_time = input.prep_time;
        recipe.difficulty = input.difficulty;
        recipe.is_premium = input.is_premium;
        recipe.rating = input.rating;
        recipe.ingredients = input.ingredients;
        recipe.instructions = input.instructions;
        recipe.nutritional_info = input.nutritional_info;
        Ok(Some(recipe.clone()))
    }

    async fn delete_recipe(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.recipes.len();
        inner.recipes.retain(|r| r.id != id);
        Ok(inner.recipes.len() < before)
    }

    async fn create_category(&self, input: CategoryInput) -> anyhow::Result<Category> {
        let category = Category {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            icon: input.icon,
        };
        self.inner.lock().unwrap().categories.push(category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        input: CategoryInput,
    ) -> anyhow::Result<Option<Category>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(category) = inner.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.name = input.name;
        category.description = input.description;
        category.icon = input.icon;
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.categories.len();
        inner.categories.retain(|c| c.id != id);
        Ok(inner.categories.len() < before)
    }

    async fn list_accounts(&self) -> anyhow::Result<Vec<UserAccount>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .profiles
            .iter()
            .map(|p| UserAccount {
                id: p.id,
                email: p.email.clone(),
                full_name: p.full_name.clone(),
                is_premium: p.is_premium,
                is_active: p.is_active,
                is_admin: inner.admins.contains(&p.id),
                created_at: p.created_at,
            })
            .collect())
    }

    async fn set_profile_active(
        &self,
        user_id: Uuid,
        active: bool,
    ) -> anyhow::Result<Option<Profile>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(profile) = inner.profiles.iter_mut().find(|p| p.id == user_id) else {
            return Ok(None);
        };
        profile.is_active = active;
        Ok(Some(profile.clone()))
    }

    async fn list_content_updates(&self) -> anyhow::Result<Vec<ContentUpdate>> {
        Ok(self.inner.lock().unwrap().updates.clone())
    }

    async fn create_content_update(
        &self,
        created_by: Uuid,
        input: ContentUpdateInput,
    ) -> anyhow::Result<ContentUpdate> {
        let update = ContentUpdate {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            kind: input.kind,
            published: input.published,
            created_by: Some(created_by),
            created_at: OffsetDateTime::now_utc(),
        };
        self.inner.lock().unwrap().updates.insert(0, update.clone());
        Ok(update)
    }

    async fn edit_content_update(
        &self,
        id: Uuid,
        input: ContentUpdateInput,
    ) -> anyhow::Result<Option<ContentUpdate>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(update) = inner.updates.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        update.title = input.title;
        update.description = input.description;
        update.kind = input.kind;
        update.published = input.published;
        Ok(Some(update.clone()))
    }

    async fn delete_content_update(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.updates.len();
        inner.updates.retain(|u| u.id != id);
        Ok(inner.updates.len() < before)
    }

    async fn set_update_published(
        &self,
        id: Uuid,
        published: bool,
    ) -> anyhow::Result<Option<ContentUpdate>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(update) = inner.updates.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        update.published = published;
        Ok(Some(update.clone()))
    }
}
