//! Client-side filtering for the listing page. Nothing here talks to the
//! server; the search bar hands its term and category to the page, which
//! narrows the already loaded list.

use crate::model::recipe::Recipe;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub term: String,
    pub category: String,
}

impl RecipeFilter {
    pub fn new(term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty() && self.category.is_empty()
    }

    /// A recipe matches when the term occurs (case-insensitively) in its title,
    /// description, tags or ingredient names, and its category equals the
    /// selected one. Blank criteria match everything.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.category.is_empty() && recipe.category.as_deref() != Some(self.category.as_str()) {
            return false;
        }

        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let contains = |text: &str| text.to_lowercase().contains(&term);

        contains(&recipe.title)
            || recipe.description.as_deref().is_some_and(|d| contains(d))
            || recipe.tags.iter().any(|tag| contains(tag))
            || recipe.ingredients.iter().any(|i| contains(&i.name))
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// Distinct non-empty categories, sorted, for the search bar's select.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .filter_map(|recipe| recipe.category.as_deref())
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::recipe::{Difficulty, Ingredient};
    use chrono::{DateTime, Utc};

    fn recipe(title: &str, category: Option<&str>, tags: &[&str], ingredient: &str) -> Recipe {
        Recipe {
            id: title.to_lowercase(),
            title: title.into(),
            description: None,
            category: category.map(str::to_string),
            difficulty: Difficulty::Easy,
            servings: 1,
            cooking_time: 10,
            ingredients: vec![Ingredient {
                name: ingredient.into(),
                ..Default::default()
            }],
            instructions: vec![],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("Pancakes", Some("Breakfast"), &["sweet"], "flour"),
            recipe("Chili", Some("Dinner"), &["spicy"], "beans"),
            recipe("Salad", None, &[], "lettuce"),
        ]
    }

    fn titles(found: Vec<&Recipe>) -> Vec<&str> {
        found.into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let recipes = sample();
        assert!(RecipeFilter::default().is_empty());
        assert!(RecipeFilter::new("   ", "").is_empty());
        assert!(!RecipeFilter::new("", "Dinner").is_empty());
        assert_eq!(RecipeFilter::default().apply(&recipes).len(), 3);
    }

    #[test]
    fn term_matches_title_tags_and_ingredients() {
        let recipes = sample();
        assert_eq!(titles(RecipeFilter::new("PAN", "").apply(&recipes)), vec!["Pancakes"]);
        assert_eq!(titles(RecipeFilter::new(" spicy ", "").apply(&recipes)), vec!["Chili"]);
        assert_eq!(titles(RecipeFilter::new("lettuce", "").apply(&recipes)), vec!["Salad"]);
    }

    #[test]
    fn category_must_match_exactly() {
        let recipes = sample();
        assert_eq!(titles(RecipeFilter::new("", "Dinner").apply(&recipes)), vec!["Chili"]);
        assert!(RecipeFilter::new("pancakes", "Dinner").apply(&recipes).is_empty());
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let mut recipes = sample();
        recipes.push(recipe("Soup", Some("Dinner"), &[], "water"));
        assert_eq!(categories(&recipes), vec!["Breakfast", "Dinner"]);
    }
}
