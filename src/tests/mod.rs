// src/tests/mod.rs
use std::rc::Rc;

use crate::components::context::{
    AppState, FeedMsg, Pagination, EPISODES_PER_PAGE, INITIAL_PAGES,
};
use crate::components::episode_card::DESCRIPTION_PREVIEW_CHARS;
use crate::components::gen_funcs::{
    format_duration, format_pub_date, parse_pub_date, strip_html_to_text, truncate_description,
};
use crate::requests::episode_reqs::{
    episode_page_url, require_api_key, sort_episodes, Episode, FeedError, PLACEHOLDER_ARTWORK,
};
use yewdux::prelude::*;

fn episode(id: i64, published_at: &str) -> Episode {
    Episode {
        id,
        title: Some(format!("Episode {}", id)),
        description: Some("<p>Show notes</p>".to_string()),
        artwork_url: Some("https://example.com/art.jpg".to_string()),
        duration: Some(1800),
        total_plays: Some(10),
        published_at: Some(published_at.to_string()),
    }
}

fn episodes(count: usize) -> Vec<Episode> {
    (0..count)
        .map(|i| episode(i as i64, "2024-01-05T08:30:00-05:00"))
        .collect()
}

#[test]
fn test_basic_state() {
    let state = AppState::default();
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert!(state.episodes.is_empty());
    assert_eq!(state.pagination.revealed(), 0);
}

#[test]
fn test_sort_is_newest_first() {
    let mut eps = vec![
        episode(1, "2023-06-01T10:00:00-04:00"),
        episode(2, "2025-02-10T10:00:00-04:00"),
        episode(3, "2024-11-20T10:00:00-04:00"),
    ];
    sort_episodes(&mut eps);

    let ids: Vec<i64> = eps.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    for pair in eps.windows(2) {
        let newer = parse_pub_date(pair[0].published_at.as_deref().unwrap());
        let older = parse_pub_date(pair[1].published_at.as_deref().unwrap());
        assert!(newer >= older);
    }
}

#[test]
fn test_sort_keeps_order_for_equal_timestamps() {
    let mut eps = vec![
        episode(10, "2024-01-05T08:30:00-05:00"),
        episode(11, "2024-01-05T08:30:00-05:00"),
        episode(12, "2024-01-05T08:30:00-05:00"),
    ];
    sort_episodes(&mut eps);

    let ids: Vec<i64> = eps.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
}

#[test]
fn test_unparseable_date_sorts_last() {
    let mut eps = vec![
        episode(1, "not a date"),
        episode(2, "2024-01-05T08:30:00-05:00"),
    ];
    sort_episodes(&mut eps);

    assert_eq!(eps[0].id, 2);
    assert_eq!(eps[1].id, 1);
}

#[test]
fn test_reveal_initial_caps_at_two_pages() {
    let mut pagination = Pagination::default();
    let revealed = pagination.reveal_initial(100);

    assert_eq!(revealed, EPISODES_PER_PAGE * INITIAL_PAGES);
    assert_eq!(pagination.revealed(), 24);
    assert!(pagination.has_more(100));
}

#[test]
fn test_reveal_initial_with_small_store() {
    let mut pagination = Pagination::default();
    let revealed = pagination.reveal_initial(5);

    assert_eq!(revealed, 5);
    assert!(!pagination.has_more(5));
}

#[test]
fn test_begin_batch_dropped_while_busy() {
    let mut pagination = Pagination::default();
    pagination.reveal_initial(100);

    assert!(pagination.begin_batch(100));
    let before = pagination;

    // Second trigger while a batch is in flight changes nothing.
    assert!(!pagination.begin_batch(100));
    assert_eq!(pagination, before);
}

#[test]
fn test_complete_batch_advances_one_page() {
    let mut pagination = Pagination::default();
    pagination.reveal_initial(100);

    assert!(pagination.begin_batch(100));
    let count = pagination.complete_batch(100);

    assert_eq!(count, EPISODES_PER_PAGE);
    assert_eq!(pagination.revealed(), 36);
    assert!(!pagination.is_busy());
}

#[test]
fn test_final_batch_is_partial() {
    let mut pagination = Pagination::default();
    pagination.reveal_initial(30);

    assert!(pagination.begin_batch(30));
    let count = pagination.complete_batch(30);

    assert_eq!(count, 6);
    assert_eq!(pagination.revealed(), 30);
    assert!(!pagination.has_more(30));
}

#[test]
fn test_exhausted_store_drops_triggers() {
    let mut pagination = Pagination::default();
    pagination.reveal_initial(20);

    assert!(!pagination.begin_batch(20));
    assert_eq!(pagination.revealed(), 20);
    assert!(!pagination.is_busy());
    assert!(!pagination.has_more(20));
}

#[test]
fn test_episodes_loaded_reveals_initial_pages() {
    let state = Rc::new(AppState {
        is_loading: true,
        ..AppState::default()
    });
    let state = FeedMsg::EpisodesLoaded(episodes(40)).apply(state);

    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.episodes.len(), 40);
    assert_eq!(state.pagination.revealed(), 24);
    assert!(state.pagination.has_more(state.episodes.len()));
}

#[test]
fn test_fetch_failure_clears_content() {
    let state = Rc::new(AppState {
        episodes: episodes(40),
        is_loading: true,
        ..AppState::default()
    });
    let state = FeedMsg::FetchFailed("boom".to_string()).apply(state);

    assert!(!state.is_loading);
    assert!(state.episodes.is_empty());
    assert_eq!(state.pagination.revealed(), 0);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(65), "1:05");
    assert_eq!(format_duration(3725), "1:02:05");
}

#[test]
fn test_format_duration_edges() {
    assert_eq!(format_duration(-5), "0:00");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(3600), "1:00:00");
}

#[test]
fn test_format_pub_date() {
    assert_eq!(format_pub_date("2024-01-05T08:30:00-05:00"), "Jan 5, 2024");
    assert_eq!(format_pub_date("2023-12-25T00:00:00"), "Dec 25, 2023");
}

#[test]
fn test_truncate_description_at_preview_length() {
    let long = "a".repeat(250);
    let (truncated, was_truncated) = truncate_description(long, DESCRIPTION_PREVIEW_CHARS);

    assert!(was_truncated);
    assert_eq!(truncated.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
    assert!(truncated.ends_with("..."));
    assert_eq!(&truncated[..DESCRIPTION_PREVIEW_CHARS], "a".repeat(200));
}

#[test]
fn test_short_description_untouched() {
    let short = "A quick chat about threat modelling.".to_string();
    let (out, was_truncated) = truncate_description(short.clone(), DESCRIPTION_PREVIEW_CHARS);

    assert!(!was_truncated);
    assert_eq!(out, short);
}

#[test]
fn test_strip_html_removes_tags_and_collapses_whitespace() {
    let html = "<p>Hello   <b>world</b></p>\n\n<p>again</p>";
    assert_eq!(strip_html_to_text(html), "Hello world again");
}

#[test]
fn test_strip_html_decodes_entities() {
    assert_eq!(strip_html_to_text("Fish &amp; Chips"), "Fish & Chips");
}

#[test]
fn test_script_payload_never_reaches_text() {
    let html = "<script>alert('pwned')</script>Real show notes";
    let text = strip_html_to_text(html);

    assert_eq!(text, "Real show notes");
    assert!(!text.contains("alert"));
}

#[test]
fn test_empty_description_stays_empty() {
    assert_eq!(strip_html_to_text(""), "");
}

#[test]
fn test_artwork_falls_back_to_placeholder() {
    let mut ep = episode(1, "2024-01-05T08:30:00-05:00");

    ep.artwork_url = None;
    assert_eq!(ep.artwork_or_placeholder(), PLACEHOLDER_ARTWORK);

    ep.artwork_url = Some(String::new());
    assert_eq!(ep.artwork_or_placeholder(), PLACEHOLDER_ARTWORK);

    ep.artwork_url = Some("https://example.com/art.jpg".to_string());
    assert_eq!(ep.artwork_or_placeholder(), "https://example.com/art.jpg");
}

#[test]
fn test_missing_api_key_fails_before_any_request() {
    assert!(matches!(
        require_api_key(None),
        Err(FeedError::MissingApiKey)
    ));
    assert!(matches!(
        require_api_key(Some(String::new())),
        Err(FeedError::MissingApiKey)
    ));
    assert_eq!(require_api_key(Some("token".to_string())).unwrap(), "token");
}

#[test]
fn test_episode_page_url() {
    assert_eq!(
        episode_page_url(42),
        "https://www.buzzsprout.com/733070/episodes/42"
    );
}

#[test]
fn test_missing_fields_deserialize_to_defaults() {
    let ep: Episode = serde_json::from_str(r#"{"id": 7}"#).unwrap();

    assert_eq!(ep.id, 7);
    assert!(ep.title.is_none());
    assert!(ep.description.is_none());
    assert!(ep.artwork_url.is_none());
    assert!(ep.duration.is_none());
    assert!(ep.total_plays.is_none());
    assert!(ep.published_at.is_none());
}
