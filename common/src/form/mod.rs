//! Editable state behind the recipe form.
//!
//! `RecipeDraft` holds every field as the user types it: numbers stay as text
//! until submission and tags are a single comma separated string. The list
//! editing rules live here so the browser component only forwards events:
//!
//! - ingredients are removed by position and appended empty;
//! - instructions are appended with `step = len + 1`, and removing one
//!   renumbers the rest so steps always read `1..=len`.
//!
//! `form_fields` turns the draft into the text parts of the multipart body.

use crate::model::recipe::{Difficulty, Ingredient, Instruction, Recipe};
use crate::requests;

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub servings: String,
    pub cooking_time: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub tags: String,
}

/// Scalar inputs of the form, addressed by the component's change messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Category,
    Difficulty,
    Servings,
    CookingTime,
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Name,
    Quantity,
    Unit,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            difficulty: Difficulty::Medium,
            servings: String::new(),
            cooking_time: String::new(),
            ingredients: vec![Ingredient::default()],
            instructions: vec![Instruction {
                step: 1,
                description: String::new(),
            }],
            tags: String::new(),
        }
    }
}

impl RecipeDraft {
    /// Seeds the draft from an existing recipe (edit mode) or with empty
    /// defaults (create mode).
    pub fn new(recipe: Option<&Recipe>) -> Self {
        let Some(recipe) = recipe else {
            return Self::default();
        };
        let defaults = Self::default();

        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone().unwrap_or_default(),
            category: recipe.category.clone().unwrap_or_default(),
            difficulty: recipe.difficulty,
            servings: recipe.servings.to_string(),
            cooking_time: recipe.cooking_time.to_string(),
            ingredients: if recipe.ingredients.is_empty() {
                defaults.ingredients
            } else {
                recipe.ingredients.clone()
            },
            instructions: if recipe.instructions.is_empty() {
                defaults.instructions
            } else {
                recipe.instructions.clone()
            },
            tags: recipe.tags.join(", "),
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Category => self.category = value,
            // The select only offers known levels; anything else keeps the current one.
            DraftField::Difficulty => {
                if let Ok(difficulty) = value.parse() {
                    self.difficulty = difficulty;
                }
            }
            DraftField::Servings => self.servings = value,
            DraftField::CookingTime => self.cooking_time = value,
            DraftField::Tags => self.tags = value,
        }
    }

    pub fn set_ingredient(&mut self, index: usize, field: IngredientField, value: String) {
        if let Some(ingredient) = self.ingredients.get_mut(index) {
            match field {
                IngredientField::Name => ingredient.name = value,
                IngredientField::Quantity => ingredient.quantity = value,
                IngredientField::Unit => ingredient.unit = value,
            }
        }
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::default());
    }

    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    pub fn set_instruction(&mut self, index: usize, description: String) {
        if let Some(instruction) = self.instructions.get_mut(index) {
            instruction.description = description;
        }
    }

    pub fn add_instruction(&mut self) {
        let step = self.instructions.len() as u32 + 1;
        self.instructions.push(Instruction {
            step,
            description: String::new(),
        });
    }

    pub fn remove_instruction(&mut self, index: usize) {
        if index >= self.instructions.len() {
            return;
        }
        self.instructions.remove(index);
        for (position, instruction) in self.instructions.iter_mut().enumerate() {
            instruction.step = position as u32 + 1;
        }
    }

    /// Remove buttons are hidden once a list is down to a single entry.
    pub fn can_remove_ingredient(&self) -> bool {
        self.ingredients.len() > 1
    }

    pub fn can_remove_instruction(&self) -> bool {
        self.instructions.len() > 1
    }

    /// Splits the comma separated tag text, trimming each label.
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    /// Text parts of the multipart payload, in submission order. Structured
    /// fields are JSON encoded; the image part is appended by the caller.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (requests::TITLE, self.title.clone()),
            (requests::DESCRIPTION, self.description.clone()),
            (requests::INGREDIENTS, encode_json(&self.ingredients)),
            (requests::INSTRUCTIONS, encode_json(&self.instructions)),
            (requests::COOKING_TIME, self.cooking_time.clone()),
            (requests::DIFFICULTY, self.difficulty.to_string()),
            (requests::SERVINGS, self.servings.clone()),
            (requests::CATEGORY, self.category.clone()),
            (requests::TAGS, encode_json(&self.tag_list())),
        ]
    }
}

/// Splits `"a, b ,c"` into `["a", "b", "c"]`. Empty text yields no tags.
pub fn split_tags(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|tag| tag.trim().to_string()).collect()
}

fn encode_json<T: serde::Serialize>(value: &T) -> String {
    // Vectors of plain structs and strings always serialize.
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn steps(draft: &RecipeDraft) -> Vec<(u32, &str)> {
        draft
            .instructions
            .iter()
            .map(|i| (i.step, i.description.as_str()))
            .collect()
    }

    #[test]
    fn create_mode_starts_with_one_empty_entry_each() {
        let draft = RecipeDraft::new(None);
        assert_eq!(draft.ingredients, vec![Ingredient::default()]);
        assert_eq!(steps(&draft), vec![(1, "")]);
        assert_eq!(draft.difficulty, Difficulty::Medium);
        assert!(!draft.can_remove_ingredient());
    }

    #[test]
    fn edit_mode_seeds_from_recipe() {
        let recipe = Recipe {
            id: "1".into(),
            title: "Tacos".into(),
            description: Some("Crispy".into()),
            category: None,
            difficulty: Difficulty::Hard,
            servings: 4,
            cooking_time: 25,
            ingredients: vec![Ingredient {
                name: "tortilla".into(),
                quantity: "8".into(),
                unit: String::new(),
            }],
            instructions: vec![],
            tags: vec!["quick".into(), "mexican".into()],
            image: "x".into(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        };

        let draft = RecipeDraft::new(Some(&recipe));
        assert_eq!(draft.servings, "4");
        assert_eq!(draft.cooking_time, "25");
        assert_eq!(draft.tags, "quick, mexican");
        assert_eq!(draft.category, "");
        assert_eq!(draft.ingredients.len(), 1);
        assert_eq!(steps(&draft), vec![(1, "")]);
    }

    #[test]
    fn removing_middle_step_renumbers_remaining() {
        let mut draft = RecipeDraft::new(None);
        draft.set_instruction(0, "chop".into());
        draft.add_instruction();
        draft.set_instruction(1, "fry".into());
        draft.add_instruction();
        draft.set_instruction(2, "serve".into());
        assert_eq!(steps(&draft), vec![(1, "chop"), (2, "fry"), (3, "serve")]);

        draft.remove_instruction(1);
        assert_eq!(steps(&draft), vec![(1, "chop"), (2, "serve")]);
    }

    #[test]
    fn new_step_number_follows_count() {
        let mut draft = RecipeDraft::new(None);
        draft.add_instruction();
        draft.add_instruction();
        draft.remove_instruction(0);
        draft.add_instruction();
        let numbers: Vec<u32> = draft.instructions.iter().map(|i| i.step).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn ingredients_can_be_emptied_but_not_underflow() {
        let mut draft = RecipeDraft::new(None);
        draft.add_ingredient();
        draft.set_ingredient(1, IngredientField::Name, "flour".into());
        draft.remove_ingredient(0);
        assert_eq!(draft.ingredients[0].name, "flour");
        draft.remove_ingredient(0);
        draft.remove_ingredient(0);
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        let mut draft = RecipeDraft::new(None);
        draft.set_field(DraftField::Tags, "spicy, quick , dinner".into());
        assert_eq!(draft.tag_list(), vec!["spicy", "quick", "dinner"]);
        assert!(split_tags("   ").is_empty());
    }

    #[test]
    fn unknown_difficulty_is_ignored() {
        let mut draft = RecipeDraft::new(None);
        draft.set_field(DraftField::Difficulty, "Easy".into());
        draft.set_field(DraftField::Difficulty, "Impossible".into());
        assert_eq!(draft.difficulty, Difficulty::Easy);
    }

    #[test]
    fn form_fields_encode_structured_parts_as_json() {
        let mut draft = RecipeDraft::new(None);
        draft.set_field(DraftField::Tags, "a, b".into());
        draft.set_ingredient(0, IngredientField::Name, "egg".into());

        let fields = draft.form_fields();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
                .unwrap()
        };

        assert_eq!(get(requests::TAGS), r#"["a","b"]"#);
        assert_eq!(get(requests::DIFFICULTY), "Medium");
        let ingredients: Vec<Ingredient> =
            serde_json::from_str(&get(requests::INGREDIENTS)).unwrap();
        assert_eq!(ingredients[0].name, "egg");
        let instructions: Vec<Instruction> =
            serde_json::from_str(&get(requests::INSTRUCTIONS)).unwrap();
        assert_eq!(instructions[0].step, 1);
    }
}
