use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::rows::{ContentUpdateRow, RecipeRow};
use super::BackendClient;
use crate::model::{
    Category, CategoryInput, ContentUpdate, ContentUpdateInput, Profile, Recipe, RecipeInput,
    UserAccount,
};

/// Postgres-backed implementation of [`BackendClient`], pointed at the
/// hosted backend's database.
#[derive(Clone)]
pub struct Backend {
    db: PgPool,
}

impl Backend {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BackendClient for Backend {
    async fn list_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, title, description, category, image_url, prep_time, difficulty,
                   is_premium, rating, ingredients, instructions, nutritional_info, created_at
            FROM recipes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        rows.into_iter().map(Recipe::try_from).collect()
    }

    async fn get_recipe(&self, id: Uuid) -> anyhow::Result<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, title, description, category, image_url, prep_time, difficulty,
                   is_premium, rating, ingredients, instructions, nutritional_info, created_at
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        row.map(Recipe::try_from).transpose()
    }

    async fn list_categories(&self) -> anyhow::Result<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, icon
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn list_published_updates(&self) -> anyhow::Result<Vec<ContentUpdate>> {
        let rows = sqlx::query_as::<_, ContentUpdateRow>(
            r#"
            SELECT id, title, description, type, published, created_by, created_at
            FROM content_updates
            WHERE published = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        rows.into_iter().map(ContentUpdate::try_from).collect()
    }

    async fn list_favorites(&self, user_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT recipe_id
            FROM favorites
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(ids)
    }

    async fn add_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO favorites (user_id, recipe_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, recipe_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn remove_favorite(&self, user_id: Uuid, recipe_id: Uuid) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE user_id = $1 AND recipe_id = $2
            "#,
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn get_profile(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, full_name, is_premium, is_active, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(profile)
    }

    async fn is_admin(&self, user_id: Uuid) -> anyhow::Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM admin_users WHERE user_id = $1)
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;
        Ok(exists)
    }

    async fn create_recipe(&self, input: RecipeInput) -> anyhow::Result<Recipe> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            INSERT INTO recipes (title, description, category, image_url, prep_time,
                                 difficulty, is_premium, rating, ingredients, instructions,
                                 nutritional_info)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, title, description, category, image_url, prep_time, difficulty,
                      is_premium, rating, ingredients, instructions, nutritional_info, created_at
            "#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.category.as_str())
        .bind(input.image_url)
        .bind(input.prep_time as i32)
        .bind(input.difficulty.as_str())
        .bind(input.is_premium)
        .bind(input.rating)
        .bind(input.ingredients)
        .bind(input.instructions)
        .bind(Json(input.nutritional_info))
        .fetch_one(&self.db)
        .await?;
        row.try_into()
    }

    async fn update_recipe(
        &self,
        id: Uuid,
        input: RecipeInput,
    ) -> anyhow::Result<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            UPDATE recipes
            SET title = $2, description = $3, category = $4, image_url = $5, prep_time = $6,
                difficulty = $7, is_premium = $8, rating = $9, ingredients = $10,
                instructions = $11, nutritional_info = $12
            WHERE id = $1
            RETURNING id, title, description, category, image_url, prep_time, difficulty,
                      is_premium, rating, ingredients, instructions, nutritional_info, created_at
            "#,
        )
        .bind(id)
        .bind(input.title)
        .bind(input.description)
        .bind(input.category.as_str())
        .bind(input.image_url)
        .bind(input.prep_time as i32)
        .bind(input.difficulty.as_str())
        .bind(input.is_premium)
        .bind(input.rating)
        .bind(input.ingredients)
        .bind(input.instructions)
        .bind(Json(input.nutritional_info))
        .fetch_optional(&self.db)
        .await?;
        row.map(Recipe::try_from).transpose()
    }

    async fn delete_recipe(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM recipes WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_category(&self, input: CategoryInput) -> anyhow::Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, icon)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, icon
            "#,
        )
        .bind(input.name)
        .bind(input.description)
        .bind(input.icon)
        .fetch_one(&self.db)
        .await?;
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        input: CategoryInput,
    ) -> anyhow::Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, description = $3, icon = $4
            WHERE id = $1
            RETURNING id, name, description, icon
            "#,
        )
        .bind(id)
        .bind(input.name)
        .bind(input.description)
        .bind(input.icon)
        .fetch_optional(&self.db)
        .await?;
        Ok(category)
    }

    async fn delete_category(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_accounts(&self) -> anyhow::Result<Vec<UserAccount>> {
        let accounts = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT p.id, p.email, p.full_name, p.is_premium, p.is_active,
                   (a.user_id IS NOT NULL) AS is_admin, p.created_at
            FROM profiles p
            LEFT JOIN admin_users a ON a.user_id = p.id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(accounts)
    }

    async fn set_profile_active(
        &self,
        user_id: Uuid,
        active: bool,
    ) -> anyhow::Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET is_active = $2
            WHERE id = $1
            RETURNING id, email, full_name, is_premium, is_active, created_at
            "#,
        )
        .bind(user_id)
        .bind(active)
        .fetch_optional(&self.db)
        .await?;
        Ok(profile)
    }

    async fn list_content_updates(&self) -> anyhow::Result<Vec<ContentUpdate>> {
        let rows = sqlx::query_as::<_, ContentUpdateRow>(
            r#"
            SELECT id, title, description, type, published, created_by, created_at
            FROM content_updates
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        rows.into_iter().map(ContentUpdate::try_from).collect()
    }

    async fn create_content_update(
        &self,
        created_by: Uuid,
        input: ContentUpdateInput,
    ) -> anyhow::Result<ContentUpdate> {
        let row = sqlx::query_as::<_, ContentUpdateRow>(
            r#"
            INSERT INTO content_updates (title, description, type, published, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, type, published, created_by, created_at
            "#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.kind.as_str())
        .bind(input.published)
        .bind(created_by)
        .fetch_one(&self.db)
        .await?;
        row.try_into()
    }

    async fn edit_content_update(
        &self,
        id: Uuid,
        input: ContentUpdateInput,
    ) -> anyhow::Result<Option<ContentUpdate>> {
        let row = sqlx::query_as::<_, ContentUpdateRow>(
            r#"
            UPDATE content_updates
            SET title = $2, description = $3, type = $4, published = $5
            WHERE id = $1
            RETURNING id, title, description, type, published, created_by, created_at
            "#,
        )
        .bind(id)
        .bind(input.title)
        .bind(input.description)
        .bind(input.kind.as_str())
        .bind(input.published)
        .fetch_optional(&self.db)
        .await?;
        row.map(ContentUpdate::try_from).transpose()
    }

    async fn delete_content_update(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM content_updates WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_update_published(
        &self,
        id: Uuid,
        published: bool,
    ) -> anyhow::Result<Option<ContentUpdate>> {
        let row = sqlx::query_as::<_, ContentUpdateRow>(
            r#"
            UPDATE content_updates
            SET published = $2
            WHERE id = $1
            RETURNING id, title, description, type, published, created_by, created_at
            "#,
        )
        .bind(id)
        .bind(published)
        .fetch_optional(&self.db)
        .await?;
        row.map(ContentUpdate::try_from).transpose()
    }
}
