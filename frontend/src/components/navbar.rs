use crate::route::Route;
use yew::{classes, html, Component, Context, Html};
use yew_router::components::Link;

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="navbar">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>{ "Recipe Book" }</Link<Route>>
                <div class="actions">
                    <Link<Route> to={Route::Home} classes={classes!("btn", "btn-link")}>{ "Recipes" }</Link<Route>>
                    <Link<Route> to={Route::AddRecipe} classes={classes!("btn")}>{ "Add Recipe" }</Link<Route>>
                </div>
            </nav>
        }
    }
}
