use crate::requests::supporter_reqs::{call_get_supporters, Supporter};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use yew::prelude::*;

// Decorative logo strip. Failures here are logged and swallowed; the episode
// pipeline never sees them.
#[function_component(SupporterLogos)]
pub fn supporter_logos() -> Html {
    let supporters = use_state(Vec::<Supporter>::new);

    {
        let supporters = supporters.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match call_get_supporters().await {
                    Ok(fetched) => supporters.set(fetched),
                    Err(e) => {
                        console::warn_1(&format!("Could not load supporters: {}", e).into());
                    }
                }
            });

            || ()
        });
    }

    if supporters.is_empty() {
        return html! {};
    }

    html! {
        <div id="supporters-logos" class="supporters-logos">
            {
                supporters.iter().map(|supporter| {
                    html! {
                        <a
                            key={supporter.name.clone()}
                            href={supporter.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="supporter-logo-link"
                            title={supporter.name.clone()}
                        >
                            <img
                                src={supporter.logo_url()}
                                alt={format!("{} logo", supporter.name)}
                                class="supporter-logo"
                            />
                        </a>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
