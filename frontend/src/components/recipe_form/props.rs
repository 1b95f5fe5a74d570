//! Properties for the `RecipeForm`.

use common::model::recipe::Recipe;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipeFormProps {
    /// The recipe being edited. `None` puts the form in create mode.
    ///
    /// Read once when the component is created; the draft is not reseeded if
    /// the prop later changes.
    #[prop_or_default]
    pub recipe: Option<Recipe>,
}

impl RecipeFormProps {
    pub fn editing_id(&self) -> Option<&str> {
        self.recipe.as_ref().map(|recipe| recipe.id.as_str())
    }
}
