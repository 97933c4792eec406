mod components;
mod config;
mod engine;
mod model;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
