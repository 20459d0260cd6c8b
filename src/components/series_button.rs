use leptos::prelude::*;
use log::warn;

use crate::net::{BrowserClient, DomUi, Endpoints, fetch_button_id, fetch_league_series};

/// Button that asks the backend to refresh a series' matches and turns
/// green or red with the answer.
#[component]
pub fn SeriesFetchButton(id: u64) -> impl IntoView {
	let on_click = move |_| {
		leptos::task::spawn_local(async move {
			let Some(endpoints) = Endpoints::from_window() else {
				warn!("no page origin, skipping series {id}");
				return;
			};
			fetch_league_series(&BrowserClient, &DomUi::new(), &endpoints, id).await;
		});
	};

	view! {
		<button id=fetch_button_id(id) class="btn btn-sm btn-outline-secondary" on:click=on_click>
			"Update series "
			{id}
		</button>
	}
}
