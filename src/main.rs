// Custom Mods
mod components;
mod requests;

#[cfg(test)]
mod tests;

use components::episode_feed::EpisodeFeed;
use components::supporters::SupporterLogos;
use components::typewriter::TypewriterIntro;

// Yew Imports
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <header class="site-header">
                <h1 class="site-title">{ "DSO Overflow" }</h1>
                <TypewriterIntro />
            </header>
            <main class="site-main">
                <h2 class="section-title">{ "Episodes" }</h2>
                <EpisodeFeed />
            </main>
            <footer class="site-footer">
                <h2 class="section-title">{ "Our Supporters" }</h2>
                <SupporterLogos />
            </footer>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
