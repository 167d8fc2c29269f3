use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Fixed category set a recipe belongs to. Distinct from the
/// admin-managed `Category` records, which only carry display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Pasta,
    Meat,
    Dessert,
    Vegetarian,
    Fitness,
    Beverage,
}

impl RecipeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::Pasta => "pasta",
            RecipeCategory::Meat => "meat",
            RecipeCategory::Dessert => "dessert",
            RecipeCategory::Vegetarian => "vegetarian",
            RecipeCategory::Fitness => "fitness",
            RecipeCategory::Beverage => "beverage",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pasta" => Ok(RecipeCategory::Pasta),
            "meat" => Ok(RecipeCategory::Meat),
            "dessert" => Ok(RecipeCategory::Dessert),
            "vegetarian" => Ok(RecipeCategory::Vegetarian),
            "fitness" => Ok(RecipeCategory::Fitness),
            "beverage" => Ok(RecipeCategory::Beverage),
            other => anyhow::bail!("unknown recipe category: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => anyhow::bail!("unknown difficulty: {other}"),
        }
    }
}

/// Stored as JSONB on the recipe row; absent records read back as zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: RecipeCategory,
    pub image_url: String,
    pub prep_time: u32,
    pub difficulty: Difficulty,
    pub is_premium: bool,
    pub rating: f64,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutritional_info: NutritionalInfo,
    pub created_at: OffsetDateTime,
}

/// Full-record payload for recipe create and update, same shape for both.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: RecipeCategory,
    #[serde(default)]
    pub image_url: String,
    pub prep_time: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutritional_info: NutritionalInfo,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category_icon")]
    pub icon: String,
}

fn default_category_icon() -> String {
    "📁".to_string()
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_premium: bool,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

/// A profile as the back-office sees it, with the admin flag resolved
/// from `admin_users` row-presence.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_premium: bool,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Feature,
    Improvement,
    Bugfix,
    Announcement,
}

impl UpdateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Feature => "feature",
            UpdateKind::Improvement => "improvement",
            UpdateKind::Bugfix => "bugfix",
            UpdateKind::Announcement => "announcement",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(UpdateKind::Feature),
            "improvement" => Ok(UpdateKind::Improvement),
            "bugfix" => Ok(UpdateKind::Bugfix),
            "announcement" => Ok(UpdateKind::Announcement),
            other => anyhow::bail!("unknown update kind: {other}"),
        }
    }
}

/// Site announcement edited in the back-office, shown publicly once
/// published.
#[derive(Debug, Clone, Serialize)]
pub struct ContentUpdate {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    pub published: bool,
    pub created_by: Option<Uuid>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentUpdateInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    #[serde(default)]
    pub published: bool,
}
