//! Summary card shown on the listing page. The whole card links to the
//! recipe's detail route.

use crate::route::Route;
use common::model::recipe::Recipe;
use yew::{classes, html, Component, Context, Html, Properties};
use yew_router::components::Link;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipeCardProps {
    pub recipe: Recipe,
}

pub struct RecipeCard;

impl Component for RecipeCard {
    type Message = ();
    type Properties = RecipeCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let recipe = &ctx.props().recipe;

        html! {
            <Link<Route> to={Route::Recipe { id: recipe.id.clone() }} classes={classes!("card")}>
                <img src={recipe.image.clone()} alt={recipe.title.clone()} />
                <div class="card-body">
                    <h3>{ &recipe.title }</h3>
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
                    <div>
                        { for recipe.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                    </div>
                </div>
            </Link<Route>>
        }
    }
}
