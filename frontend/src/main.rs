use crate::app::App;

mod app;
mod components;
mod helpers;
mod pages;
mod route;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
