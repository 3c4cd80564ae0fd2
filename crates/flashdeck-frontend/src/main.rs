mod browser;
mod components;
mod hooks;
mod pages;
mod providers;
mod view;

use yew::prelude::*;

use pages::CreateSetPage;

#[function_component(App)]
fn app() -> Html {
    html! { <CreateSetPage /> }
}

fn main() {
    flashdeck::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
