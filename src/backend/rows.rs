use sqlx::types::Json;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::{ContentUpdate, NutritionalInfo, Recipe};

/// Raw recipe row; `category` and `difficulty` are TEXT on the backend
/// side and only become enums at the conversion boundary.
#[derive(Debug, FromRow)]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub prep_time: i32,
    pub difficulty: String,
    pub is_premium: bool,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutritional_info: Option<Json<NutritionalInfo>>,
    pub created_at: OffsetDateTime,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = anyhow::Error;

    fn try_from(r: RecipeRow) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: r.id,
            title: r.title,
            description: r.description,
            category: r.category.parse()?,
            image_url: r.image_url,
            prep_time: r.prep_time.max(0) as u32,
            difficulty: r.difficulty.parse()?,
            is_premium: r.is_premium,
            rating: r.rating,
            ingredients: r.ingredients,
            instructions: r.instructions,
            nutritional_info: r.nutritional_info.map(|j| j.0).unwrap_or_default(),
            created_at: r.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct ContentUpdateRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub published: bool,
    pub created_by: Option<Uuid>,
    pub created_at: OffsetDateTime,
}

impl TryFrom<ContentUpdateRow> for ContentUpdate {
    type Error = anyhow::Error;

    fn try_from(r: ContentUpdateRow) -> Result<Self, Self::Error> {
        Ok(ContentUpdate {
            id: r.id,
            title: r.title,
            description: r.description,
            kind: r.kind.parse()?,
            published: r.published,
            created_by: r.created_by,
            created_at: r.created_at,
        })
    }
}
