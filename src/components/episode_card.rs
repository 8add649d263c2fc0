use super::gen_funcs::{
    format_duration, format_pub_date, strip_html_to_text, truncate_description,
};
use crate::requests::episode_reqs::{episode_page_url, Episode};
use yew::prelude::*;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;

#[derive(Properties, PartialEq)]
pub struct EpisodeCardProps {
    pub episode: Episode,
}

#[function_component(EpisodeCard)]
pub fn episode_card(props: &EpisodeCardProps) -> Html {
    let episode = &props.episode;

    let title = episode.title.clone().unwrap_or_default();
    let artwork = episode.artwork_or_placeholder();
    let formatted_date = format_pub_date(episode.published_at.as_deref().unwrap_or_default());
    let formatted_duration = format_duration(episode.duration.unwrap_or(0));
    let total_plays = episode.total_plays.unwrap_or(0);

    let plain_description = strip_html_to_text(episode.description.as_deref().unwrap_or_default());
    let (description, _is_truncated) =
        truncate_description(plain_description, DESCRIPTION_PREVIEW_CHARS);

    let on_card_click = {
        let episode_url = episode_page_url(episode.id);
        Callback::from(move |_: MouseEvent| {
            // Episode pages live on the hosting provider, opened in a new tab.
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&episode_url, "_blank");
            }
        })
    };

    html! {
        <div class="episode-card" onclick={on_card_click}>
            <div class="episode-image-container">
                <img
                    src={artwork}
                    alt={title.clone()}
                    class="episode-image"
                    loading="lazy"
                />
            </div>
            <div class="episode-content">
                <h3 class="episode-title">{ &title }</h3>
                <div class="episode-meta">
                    <span class="meta-item">
                        <svg viewBox="0 0 24 24">
                            <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8zm.5-13H11v6l5.25 3.15.75-1.23-4.5-2.67z"/>
                        </svg>
                        { &formatted_date }
                    </span>
                    <span class="meta-item">
                        <svg viewBox="0 0 24 24">
                            <path d="M8 5v14l11-7z"/>
                        </svg>
                        { &formatted_duration }
                    </span>
                </div>
                {
                    if !description.is_empty() {
                        html! { <p class="episode-description">{ &description }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="episode-stats">
                    <div class="play-count">
                        <svg viewBox="0 0 24 24">
                            <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 14.5v-9l6 4.5-6 4.5z"/>
                        </svg>
                        { format!("{} plays", total_plays) }
                    </div>
                    <span class="episode-date">{ &formatted_date }</span>
                </div>
            </div>
        </div>
    }
}
