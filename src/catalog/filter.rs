use serde::Deserialize;

use crate::model::{Difficulty, Recipe, RecipeCategory};

/// User-chosen constraints narrowing the displayed recipe subset.
/// Transient and UI-local; `None` on an axis means "all". The default
/// value matches every recipe.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub q: String,
    pub category: Option<RecipeCategory>,
    pub difficulty: Option<Difficulty>,
    pub max_prep_time: Option<u32>,
    pub premium_only: bool,
}

impl FilterCriteria {
    /// Conjunction of all five axes. Pure and cheap enough to run on
    /// every keystroke.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_query(recipe)
            && self.category.map_or(true, |c| c == recipe.category)
            && self.difficulty.map_or(true, |d| d == recipe.difficulty)
            && self.max_prep_time.map_or(true, |max| recipe.prep_time <= max)
            && (!self.premium_only || recipe.is_premium)
    }

    // Case-insensitive substring over title, description and any single
    // ingredient; the empty query matches everything.
    fn matches_query(&self, recipe: &Recipe) -> bool {
        if self.q.is_empty() {
            return true;
        }
        let q = self.q.to_lowercase();
        recipe.title.to_lowercase().contains(&q)
            || recipe.description.to_lowercase().contains(&q)
            || recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&q))
    }
}

/// Order-preserving subsequence of `recipes` passing `criteria`. Never
/// reorders or duplicates; an empty snapshot yields an empty result.
pub fn filter<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NutritionalInfo;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn recipe(
        title: &str,
        category: RecipeCategory,
        difficulty: Difficulty,
        prep_time: u32,
        is_premium: bool,
    ) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: title.into(),
            description: format!("{title} description"),
            category,
            image_url: String::new(),
            prep_time,
            difficulty,
            is_premium,
            rating: 4.5,
            ingredients: vec!["salt".into(), "olive oil".into()],
            instructions: vec!["mix".into(), "serve".into()],
            nutritional_info: NutritionalInfo::default(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn sample_snapshot() -> Vec<Recipe> {
        vec![
            recipe("Pudim", RecipeCategory::Dessert, Difficulty::Easy, 20, false),
            recipe("Churrasco", RecipeCategory::Meat, Difficulty::Hard, 90, false),
            recipe(
                "Bolo de Chocolate",
                RecipeCategory::Dessert,
                Difficulty::Medium,
                45,
                true,
            ),
            recipe(
                "Salada Fitness",
                RecipeCategory::Fitness,
                Difficulty::Easy,
                10,
                true,
            ),
        ]
    }

    #[test]
    fn default_criteria_is_identity() {
        let recipes = sample_snapshot();
        let visible = filter(&recipes, &FilterCriteria::default());
        let ids: Vec<_> = visible.iter().map(|r| r.id).collect();
        let all: Vec<_> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn result_is_an_order_preserving_subsequence() {
        let recipes = sample_snapshot();
        let criteria = FilterCriteria {
            difficulty: Some(Difficulty::Easy),
            ..Default::default()
        };
        let visible = filter(&recipes, &criteria);

        // No reordering: positions in the result follow snapshot order
        let positions: Vec<_> = visible
            .iter()
            .map(|v| recipes.iter().position(|r| r.id == v.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        // No duplication
        let mut deduped = positions.clone();
        deduped.dedup();
        assert_eq!(positions, deduped);
    }

    #[test]
    fn filtering_is_idempotent() {
        let recipes = sample_snapshot();
        let criteria = FilterCriteria {
            category: Some(RecipeCategory::Dessert),
            max_prep_time: Some(60),
            ..Default::default()
        };
        let once: Vec<Recipe> = filter(&recipes, &criteria).into_iter().cloned().collect();
        let twice = filter(&once, &criteria);
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(&twice).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn query_match_is_case_insensitive() {
        let recipes = sample_snapshot();
        for q in ["bolo", "BOLO", "choco"] {
            let criteria = FilterCriteria {
                q: q.into(),
                ..Default::default()
            };
            let visible = filter(&recipes, &criteria);
            assert_eq!(visible.len(), 1, "query {q:?}");
            assert_eq!(visible[0].title, "Bolo de Chocolate");
        }
    }

    #[test]
    fn query_matches_ingredients_too() {
        let mut recipes = sample_snapshot();
        recipes[1].ingredients = vec!["picanha".into(), "coarse salt".into()];
        let criteria = FilterCriteria {
            q: "Picanha".into(),
            ..Default::default()
        };
        let visible = filter(&recipes, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Churrasco");
    }

    #[test]
    fn category_and_prep_time_combine() {
        let recipes = vec![
            recipe("Pudim", RecipeCategory::Dessert, Difficulty::Easy, 20, false),
            recipe("Churrasco", RecipeCategory::Meat, Difficulty::Hard, 90, false),
        ];
        let criteria = FilterCriteria {
            category: Some(RecipeCategory::Dessert),
            max_prep_time: Some(30),
            ..Default::default()
        };
        let visible = filter(&recipes, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Pudim");
    }

    #[test]
    fn premium_only_excludes_free_recipes() {
        let recipes = sample_snapshot();
        let criteria = FilterCriteria {
            premium_only: true,
            ..Default::default()
        };
        let visible = filter(&recipes, &criteria);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|r| r.is_premium));

        let all_free: Vec<Recipe> = recipes
            .iter()
            .filter(|r| !r.is_premium)
            .cloned()
            .collect();
        assert!(filter(&all_free, &criteria).is_empty());

        let all_premium: Vec<Recipe> = recipes
            .iter()
            .filter(|r| r.is_premium)
            .cloned()
            .collect();
        assert_eq!(filter(&all_premium, &criteria).len(), all_premium.len());
    }

    #[test]
    fn unreachable_prep_time_yields_empty_not_error() {
        let recipes = sample_snapshot();
        let criteria = FilterCriteria {
            max_prep_time: Some(5),
            ..Default::default()
        };
        assert!(filter(&recipes, &criteria).is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty() {
        let criteria = FilterCriteria {
            q: "anything".into(),
            ..Default::default()
        };
        assert!(filter(&[], &criteria).is_empty());
    }
}
