use crate::components::recipe_detail::RecipeDetail;
use crate::components::spinner::Spinner;
use crate::helpers::toast_error;
use crate::route::Route;
use crate::services::api;
use common::model::recipe::Recipe;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipePageProps {
    pub id: String,
}

/// Outcome of loading the recipe named by the route. `id` is the id that was
/// requested, so answers for a route the user already left can be dropped.
pub struct Fetched {
    pub id: String,
    pub result: Result<Recipe, String>,
}

impl Fetched {
    pub fn is_for(&self, route_id: &str) -> bool {
        self.id == route_id
    }
}

pub enum Msg {
    Fetched(Fetched),
}

impl From<Fetched> for Msg {
    fn from(fetched: Fetched) -> Self {
        Msg::Fetched(fetched)
    }
}

#[derive(Default)]
pub struct RecipeViewPage {
    recipe: Option<Recipe>,
}

impl Component for RecipeViewPage {
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
                error!(format!("loading recipe {id} failed: {reason}"));
                toast_error("Recipe not found");
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
        match &self.recipe {
            Some(recipe) => html! { <RecipeDetail recipe={recipe.clone()} /> },
            None => html! { <Spinner /> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            fetch_recipe(ctx);
        }
    }
}

/// Loads the recipe named by the route and delivers it as a `Fetched`
/// message. Shared with the edit page.
pub fn fetch_recipe<C>(ctx: &Context<C>)
where
    C: Component<Properties = RecipePageProps>,
    C::Message: From<Fetched>,
{
    let id = ctx.props().id.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::get_recipe(&id).await.map_err(|err| err.to_string());
        link.send_message(C::Message::from(Fetched { id, result }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(id: &str) -> Fetched {
        Fetched {
            id: id.to_string(),
            result: Err("404".to_string()),
        }
    }

    #[test]
    fn answers_for_a_previous_route_are_dropped() {
        assert!(failed("b").is_for("b"));
        assert!(!failed("a").is_for("b"));
    }
}
