use crate::components::recipe_form::RecipeForm;
use yew::prelude::*;

pub struct AddRecipePage;

impl Component for AddRecipePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! { <RecipeForm /> }
    }
}
