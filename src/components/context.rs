use crate::requests::episode_reqs::Episode;
use std::rc::Rc;
use yewdux::prelude::*;

pub const EPISODES_PER_PAGE: usize = 12;
pub const INITIAL_PAGES: usize = 2;
pub const REVEAL_DELAY_MS: u32 = 300;

// Reveal cursor plus in-flight flag for the episode grid. The cursor never
// decreases and never exceeds the store length.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pagination {
    revealed: usize,
    busy: bool,
}

impl Pagination {
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.revealed < total
    }

    // First two pages, shown unconditionally once the fetch resolves.
    pub fn reveal_initial(&mut self, total: usize) -> usize {
        self.revealed = total.min(EPISODES_PER_PAGE * INITIAL_PAGES);
        self.revealed
    }

    // Gate for a reveal batch. Returns false without touching anything when a
    // batch is already in flight or the store is exhausted; triggers arriving
    // while busy are dropped, never queued.
    pub fn begin_batch(&mut self, total: usize) -> bool {
        if self.busy || self.revealed >= total {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn complete_batch(&mut self, total: usize) -> usize {
        let count = EPISODES_PER_PAGE.min(total.saturating_sub(self.revealed));
        self.revealed += count;
        self.busy = false;
        count
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub episodes: Vec<Episode>,
    pub pagination: Pagination,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub enum FeedMsg {
    EpisodesLoaded(Vec<Episode>),
    FetchFailed(String),
}

impl Reducer<AppState> for FeedMsg {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        let state_mut = Rc::make_mut(&mut state);

        match self {
            FeedMsg::EpisodesLoaded(episodes) => {
                state_mut.episodes = episodes;
                state_mut.pagination = Pagination::default();
                state_mut
                    .pagination
                    .reveal_initial(state_mut.episodes.len());
                state_mut.is_loading = false;
                state_mut.error = None;
            }
            FeedMsg::FetchFailed(message) => {
                state_mut.episodes.clear();
                state_mut.pagination = Pagination::default();
                state_mut.is_loading = false;
                state_mut.error = Some(message);
            }
        }

        state
    }
}
