use yew::{html, Component, Context, Html};

pub struct Spinner;

impl Component for Spinner {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="spinner" role="status" aria-label="Loading"></div>
        }
    }
}
