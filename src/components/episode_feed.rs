use super::context::{AppState, FeedMsg, REVEAL_DELAY_MS};
use super::episode_card::EpisodeCard;
use crate::requests::episode_reqs::{call_get_episodes, configured_api_key, require_api_key};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    console, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;
use yewdux::prelude::*;

// Start loading a batch shortly before the sentinel scrolls into view.
const SENTINEL_LOOKAHEAD: &str = "100px";

fn load_more_episodes(dispatch: Dispatch<AppState>) {
    let state = dispatch.get();
    if state.pagination.is_busy() || !state.pagination.has_more(state.episodes.len()) {
        return;
    }

    spawn_local(async move {
        let mut started = false;
        dispatch.reduce_mut(|state| {
            started = state.pagination.begin_batch(state.episodes.len());
        });
        if !started {
            return;
        }

        // Fixed short delay before the batch lands
        TimeoutFuture::new(REVEAL_DELAY_MS).await;

        dispatch.reduce_mut(|state| {
            state.pagination.complete_batch(state.episodes.len());
        });
    });
}

#[function_component(EpisodeFeed)]
pub fn episode_feed() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let sentinel_ref = use_node_ref();

    // Fetch episodes on component mount
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.reduce_mut(|state| state.is_loading = true);

            let effect_dispatch = dispatch.clone();
            spawn_local(async move {
                let api_key = match require_api_key(configured_api_key()) {
                    Ok(key) => key,
                    Err(e) => {
                        console::error_1(&format!("Error initializing episode feed: {}", e).into());
                        effect_dispatch.apply(FeedMsg::FetchFailed(e.to_string()));
                        return;
                    }
                };

                match call_get_episodes(&api_key).await {
                    Ok(episodes) => {
                        console::log_1(&format!("Fetched {} episodes", episodes.len()).into());
                        effect_dispatch.apply(FeedMsg::EpisodesLoaded(episodes));
                    }
                    Err(e) => {
                        console::error_1(&format!("Error fetching episodes: {}", e).into());
                        effect_dispatch.apply(FeedMsg::FetchFailed(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    // Install the infinite-scroll observer once the store is populated. The
    // observer stays registered for the page lifetime.
    {
        let dispatch = dispatch.clone();
        let sentinel_ref = sentinel_ref.clone();
        let have_episodes = !state.episodes.is_empty();

        use_effect_with(have_episodes, move |have_episodes| {
            if *have_episodes {
                if let Some(sentinel) = sentinel_ref.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, _observer: IntersectionObserver| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if intersecting {
                                load_more_episodes(dispatch.clone());
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(SENTINEL_LOOKAHEAD);

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&sentinel);
                            callback.forget();
                        }
                        Err(e) => console::error_1(&e),
                    }
                }
            }
            || ()
        });
    }

    let revealed = state.pagination.revealed();
    let show_load_more = state.pagination.has_more(state.episodes.len());

    html! {
        <section class="episodes-section">
            {
                if state.is_loading {
                    html! {
                        <div id="loading" class="loading-indicator">
                            <div class="spinner"></div>
                            <p>{ "Loading episodes..." }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.error.is_some() {
                    html! {
                        <div id="error" class="error-panel">
                            <h3>{ "Unable to load episodes" }</h3>
                            <p>{ "Something went wrong while fetching the episode list. Please try again later." }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div id="episodes-grid" class="episodes-grid">
                {
                    state.episodes.iter().take(revealed).map(|episode| {
                        html! { <EpisodeCard key={episode.id.to_string()} episode={episode.clone()} /> }
                    }).collect::<Html>()
                }
            </div>
            <div
                id="load-more"
                ref={sentinel_ref}
                class="load-more"
                style={ if show_load_more { "display: block;" } else { "display: none;" } }
            >
                <div class="spinner"></div>
                <p>{ "Loading more episodes..." }</p>
            </div>
        </section>
    }
}
