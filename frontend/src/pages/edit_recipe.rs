use crate::components::recipe_form::RecipeForm;
use crate::components::spinner::Spinner;
use crate::helpers::toast_error;
use crate::pages::recipe_view::{fetch_recipe, Fetched, RecipePageProps};
use crate::route::Route;
use common::model::recipe::Recipe;
use gloo_console::error;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

pub enum Msg {
    Fetched(Fetched),
}

impl From<Fetched> for Msg {
    fn from(fetched: Fetched) -> Self {
        Msg::Fetched(fetched)
    }
}

#[derive(Default)]
pub struct EditRecipePage {
    recipe: Option<Recipe>,
}

impl Component for EditRecipePage {
    type Message = Msg;
    type Properties = RecipePageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Fetched(fetched) = msg;
        if !fetched.is_for(&ctx.props().id) {
            return false;
        }
        let Fetched { id, result } = fetched;
        match result {
            Ok(recipe) => {
                self.recipe = Some(recipe);
                true
            }
            Err(reason) => {
                error!(format!("loading recipe {id} for edit failed: {reason}"));
                toast_error("Failed to load recipe");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.recipe = None;
            fetch_recipe(ctx);
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        // Keyed by id so a different recipe gets a freshly seeded form.
        match &self.recipe {
            Some(recipe) => html! {
                <RecipeForm key={recipe.id.clone()} recipe={Some(recipe.clone())} />
            },
            None => html! { <Spinner /> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_recipe(ctx);
        }
    }
}
