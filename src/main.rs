mod components;
mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod selector;
mod timers;
mod transition;


use yew::prelude::*;

use components::VerifyHero;
use config::LandingConfig;
use content::Content;

#[function_component(App)]
fn app() -> Html {
    // Read once at mount.
    let config = use_state(LandingConfig::load);
    let content = use_state(Content::load);

    html! {
        <VerifyHero content={(*content).clone()} config={(*config).clone()} />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
