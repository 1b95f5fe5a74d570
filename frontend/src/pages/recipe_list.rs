use crate::components::recipe_card::RecipeCard;
use crate::components::search_bar::SearchBar;
use crate::components::spinner::Spinner;
use crate::helpers::toast_error;
use crate::services::api;
use common::model::recipe::Recipe;
use common::search::{categories, RecipeFilter};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

pub enum Msg {
    Loaded(Vec<Recipe>),
    LoadFailed(String),
    Search(RecipeFilter),
}

pub struct RecipeListPage {
    recipes: Vec<Recipe>,
    filter: RecipeFilter,
    loading: bool,
}

impl Component for RecipeListPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            recipes: Vec::new(),
            filter: RecipeFilter::default(),
            loading: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(recipes) => {
                self.recipes = recipes;
                self.loading = false;
            }
            Msg::LoadFailed(reason) => {
                self.loading = false;
                error!(format!("loading recipes failed: {reason}"));
                toast_error("Something went wrong");
            }
            Msg::Search(filter) => self.filter = filter,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <Spinner /> };
        }

        let visible = self.filter.apply(&self.recipes);
        let on_search = ctx.link().callback(Msg::Search);
        let empty_message = if self.filter.is_empty() {
            "No recipes yet. Add the first one!"
        } else {
            "No recipes match your search."
        };

        html! {
            <>
                <SearchBar categories={categories(&self.recipes)} {on_search} />
                if visible.is_empty() {
                    <p>{ empty_message }</p>
                } else {
                    <div class="grid">
                        { for visible.into_iter().map(|recipe| html! {
                            <RecipeCard key={recipe.id.clone()} recipe={recipe.clone()} />
                        }) }
                    </div>
                }
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_recipes().await {
                    Ok(recipes) => link.send_message(Msg::Loaded(recipes)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
        }
    }
}
