//! Full recipe view: image, metadata, ingredient list, numbered steps and the
//! edit/delete actions. Delete asks for confirmation, calls the API and
//! returns to the listing when it succeeds.

use crate::helpers::{confirm, toast_error, toast_success};
use crate::route::Route;
use crate::services::api::{self, ClientError};
use common::model::recipe::Recipe;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::scope_ext::RouterScopeExt;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipeDetailProps {
    pub recipe: Recipe,
}

pub enum Msg {
    Delete,
    Deleted,
    DeleteFailed(ClientError),
}

#[derive(Default)]
pub struct RecipeDetail {
    deleting: bool,
}

impl Component for RecipeDetail {
    type Message = Msg;
    type Properties = RecipeDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Delete => {
                if self.deleting || !confirm("Are you sure you want to delete this recipe?") {
                    return false;
                }
                self.deleting = true;
                let id = ctx.props().recipe.id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::delete_recipe(&id).await {
                        Ok(()) => link.send_message(Msg::Deleted),
                        Err(err) => link.send_message(Msg::DeleteFailed(err)),
                    }
                });
                true
            }
            Msg::Deleted => {
                toast_success("Recipe deleted successfully!");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                false
            }
            Msg::DeleteFailed(err) => {
                self.deleting = false;
                error!(format!("deleting recipe failed: {err}"));
                match err {
                    ClientError::Status { message, .. } if !message.is_empty() => toast_error(&message),
                    _ => toast_error("Error deleting recipe"),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let recipe = &ctx.props().recipe;
        let on_delete = ctx.link().callback(|_: MouseEvent| Msg::Delete);

        let mut steps = recipe.instructions.clone();
        steps.sort_by_key(|instruction| instruction.step);

        html! {
            <article class="recipe-detail">
                <img class="hero" src={recipe.image.clone()} alt={recipe.title.clone()} />
                <h1>{ &recipe.title }</h1>
                if let Some(description) = &recipe.description {
                    <p>{ description }</p>
                }
                <div class="meta">
                    if let Some(category) = &recipe.category {
                        <span>{ category }</span>
                    }
                    <span>{ format!("{} min", recipe.cooking_time) }</span>
                    <span>{ format!("Serves {}", recipe.servings) }</span>
                    <span>{ recipe.difficulty.as_str() }</span>
                </div>

                <h2>{ "Ingredients" }</h2>
                <ul>
                    { for recipe.ingredients.iter().map(|ingredient| html! {
                        <li>{ ingredient.display_line() }</li>
                    }) }
                </ul>

                <h2>{ "Instructions" }</h2>
                <ol>
                    { for steps.iter().map(|instruction| html! {
                        <li>
                            <span class="step-number">{ instruction.step }</span>
                            { &instruction.description }
                        </li>
                    }) }
                </ol>

                if !recipe.tags.is_empty() {
                    <div>
                        { for recipe.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                    </div>
                }

                <div class="actions">
                    <Link<Route> to={Route::EditRecipe { id: recipe.id.clone() }} classes={classes!("btn")}>
                        { "Edit" }
                    </Link<Route>>
                    <button class="btn btn-danger" onclick={on_delete} disabled={self.deleting}>
                        { "Delete" }
                    </button>
                </div>
            </article>
        }
    }
}
