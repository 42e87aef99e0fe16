use yew::prelude::*;

mod chart;
mod components;
mod hooks;
mod services;

use components::Dashboard;

#[function_component(App)]
fn app() -> Html {
    html! { <Dashboard /> }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
