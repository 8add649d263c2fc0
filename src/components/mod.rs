pub mod context;
pub mod episode_card;
pub mod episode_feed;
pub mod gen_funcs;
pub mod supporters;
pub mod typewriter;
