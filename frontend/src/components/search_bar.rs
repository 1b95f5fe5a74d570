//! Search input plus category select. The page receives the filter only when
//! the form is submitted or cleared; filtering itself happens there.

use common::search::RecipeFilter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub categories: Vec<String>,
    pub on_search: Callback<RecipeFilter>,
}

pub enum Msg {
    Term(String),
    Category(String),
    Submit,
    Clear,
}

#[derive(Default)]
pub struct SearchBar {
    filter: RecipeFilter,
}

impl Component for SearchBar {
    type Message = Msg;
    type Properties = SearchBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Term(term) => self.filter.term = term,
            Msg::Category(category) => self.filter.category = category,
            Msg::Submit => ctx.props().on_search.emit(self.filter.clone()),
            Msg::Clear => {
                self.filter = RecipeFilter::default();
                ctx.props().on_search.emit(self.filter.clone());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_term = link.callback(|e: InputEvent| {
            Msg::Term(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_category = link.callback(|e: Event| {
            Msg::Category(e.target_unchecked_into::<HtmlSelectElement>().value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="row search-bar" {onsubmit}>
                <input
                    type="search"
                    placeholder="Search recipes, tags or ingredients..."
                    value={self.filter.term.clone()}
                    oninput={on_term}
                />
                <select onchange={on_category}>
                    <option value="" selected={self.filter.category.is_empty()}>{ "All categories" }</option>
                    { for ctx.props().categories.iter().map(|category| html! {
                        <option value={category.clone()} selected={*category == self.filter.category}>
                            { category }
                        </option>
                    }) }
                </select>
                <button type="submit" class="btn">{ "Search" }</button>
                <button type="button" class="btn btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::Clear)}>
                    { "Clear" }
                </button>
            </form>
        }
    }
}
