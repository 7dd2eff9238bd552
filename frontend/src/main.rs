use crate::app::App;

mod api;
mod app;
mod components;
mod editor;
mod helpers;
mod video;

fn main() {
    yew::Renderer::<App>::new().render();
}
