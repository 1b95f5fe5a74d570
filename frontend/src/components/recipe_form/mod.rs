//! Create/edit form for a recipe.
//!
//! The same component serves both routes: with a `recipe` prop it seeds the
//! draft from it and submits a PUT, otherwise it starts from defaults and
//! submits a POST. On success it toasts and returns to the listing.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecipeFormProps;
pub use state::RecipeForm;

impl Component for RecipeForm {
    type Message = Msg;
    type Properties = RecipeFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        RecipeForm::new(ctx.props().recipe.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.revoke_preview();
    }
}
