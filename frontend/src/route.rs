use crate::pages::add_recipe::AddRecipePage;
use crate::pages::edit_recipe::EditRecipePage;
use crate::pages::recipe_list::RecipeListPage;
use crate::pages::recipe_view::RecipeViewPage;
use yew::{html, Html};
use yew_router::Routable;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/recipes/:id")]
    Recipe { id: String },
    #[at("/add-recipe")]
    AddRecipe,
    #[at("/edit-recipe/:id")]
    EditRecipe { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <RecipeListPage /> },
        Route::Recipe { id } => html! { <RecipeViewPage {id} /> },
        Route::AddRecipe => html! { <AddRecipePage /> },
        Route::EditRecipe { id } => html! { <EditRecipePage {id} /> },
    }
}
