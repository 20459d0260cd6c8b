//! Hero statistics charts: relationship graph, pick-share donut and ranked
//! bars, plus the fetch helpers that feed them.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod net;
mod pages;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use crate::components::bar_chart::{BarConfig, BarDatum, RankedBar};
pub use crate::components::force_graph::{GraphConfig, GraphData, GraphLink, GraphNode, RelationshipGraph};
pub use crate::components::pie_chart::{CategoryPie, PieConfig, PieSlice};
pub use crate::components::series_button::SeriesFetchButton;
pub use crate::net::{
	BrowserClient, ChartSet, DomUi, Endpoints, FetchError, FetchStatus, FetchUi, HeroNode, HeroQuery,
	HeroStats, HttpClient, ProgressGuard, fetch_button_id, fetch_heroes, fetch_league_series,
	load_hero_stats,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the stats dashboard and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Hero statistics" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
