//! Backend calls for the stats pages and the page feedback around them.

mod client;
mod endpoints;
mod error;
mod fetch;
mod types;
mod ui;

pub use client::{BrowserClient, HttpClient};
pub use endpoints::{Endpoints, HeroQuery};
pub use error::FetchError;
pub use fetch::{fetch_heroes, fetch_league_series, load_hero_stats};
pub use types::{ChartSet, HeroNode, HeroStats};
pub use ui::{DomUi, FetchStatus, FetchUi, ProgressGuard, fetch_button_id};
