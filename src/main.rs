mod attach;
mod components;
mod hooks;
mod model;
mod recognizer;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
