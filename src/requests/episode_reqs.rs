use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::components::gen_funcs::parse_pub_date;

pub const BUZZSPROUT_HOST: &str = "https://www.buzzsprout.com";
pub const SHOW_ID: &str = "733070";
pub const PLACEHOLDER_ARTWORK: &str = "https://via.placeholder.com/400x225?text=DSO+Overflow";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub artwork_url: Option<String>,
    pub duration: Option<i64>,
    pub total_plays: Option<i64>,
    pub published_at: Option<String>,
}

impl Episode {
    pub fn artwork_or_placeholder(&self) -> String {
        match &self.artwork_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => PLACEHOLDER_ARTWORK.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("API key not configured. Please set the episode API key on the host page.")]
    MissingApiKey,
    #[error("episode request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },
    #[error(transparent)]
    Transport(#[from] gloo_net::Error),
}

// The host page injects `window.API_CONFIG = { API_KEY: "..." }` at deploy time.
pub fn configured_api_key() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("API_CONFIG")).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    let key = js_sys::Reflect::get(&config, &JsValue::from_str("API_KEY")).ok()?;
    key.as_string()
}

pub fn require_api_key(configured: Option<String>) -> Result<String, FeedError> {
    match configured {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(FeedError::MissingApiKey),
    }
}

pub async fn call_get_episodes(api_key: &str) -> Result<Vec<Episode>, FeedError> {
    let url = format!("{}/api/{}/episodes.json", BUZZSPROUT_HOST, SHOW_ID);

    let response = Request::get(&url)
        .header("Authorization", &format!("Token token={}", api_key))
        .send()
        .await?;

    if !response.ok() {
        return Err(FeedError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let mut episodes: Vec<Episode> = response.json().await?;
    sort_episodes(&mut episodes);
    Ok(episodes)
}

// Newest first; the sort is stable so episodes sharing a timestamp keep
// their response order.
pub fn sort_episodes(episodes: &mut [Episode]) {
    episodes.sort_by(|a, b| {
        let a_date = parse_pub_date(a.published_at.as_deref().unwrap_or_default());
        let b_date = parse_pub_date(b.published_at.as_deref().unwrap_or_default());
        b_date.cmp(&a_date)
    });
}

pub fn episode_page_url(episode_id: i64) -> String {
    format!("{}/{}/episodes/{}", BUZZSPROUT_HOST, SHOW_ID, episode_id)
}
