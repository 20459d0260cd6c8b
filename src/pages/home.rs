use leptos::prelude::*;
use log::warn;
use url::form_urlencoded;

use crate::components::bar_chart::RankedBar;
use crate::components::force_graph::RelationshipGraph;
use crate::components::pie_chart::CategoryPie;
use crate::components::series_button::SeriesFetchButton;
use crate::net::{BrowserClient, DomUi, Endpoints, HeroQuery, HeroStats, load_hero_stats};

const PROGRESS_ID: &str = "heroes-progress";

/// Query string of the current page, without the leading `?`.
fn page_query() -> String {
	web_sys::window()
		.and_then(|w| w.location().search().ok())
		.map(|s| s.trim_start_matches('?').to_owned())
		.unwrap_or_default()
}

/// Every numeric `series` parameter, in order.
fn series_ids(query: &str) -> Vec<u64> {
	form_urlencoded::parse(query.as_bytes())
		.filter(|(k, _)| k == "series")
		.filter_map(|(_, v)| v.parse().ok())
		.collect()
}

/// Graph, donut and bar chart for the picks and for the bans.
#[component]
fn HeroCharts(stats: HeroStats) -> impl IntoView {
	[("Picks", stats.picks()), ("Bans", stats.bans())]
		.into_iter()
		.filter(|(_, set)| !set.is_empty())
		.map(|(title, set)| {
			view! {
				<section class="hero-section">
					<h2>{title}</h2>
					<RelationshipGraph data=set.graph />
					<div class="hero-section__charts">
						<CategoryPie data=set.pie />
						<RankedBar data=set.bars zoomable=true />
					</div>
				</section>
			}
		})
		.collect_view()
}

/// Hero statistics dashboard driven by the page query string
/// (`type_obj`, `id_obj` and optional filters; `series` adds refresh buttons).
#[component]
pub fn Home() -> impl IntoView {
	let query = page_query();
	let hero_query = HeroQuery::from_query_string(&query);
	let has_query = hero_query.is_some();
	let series = series_ids(&query);
	let stats = RwSignal::new(None::<HeroStats>);
	let loading = RwSignal::new(has_query);

	Effect::new(move |_| {
		let Some(q) = hero_query.clone() else {
			return;
		};
		leptos::task::spawn_local(async move {
			let Some(endpoints) = Endpoints::from_window() else {
				warn!("no page origin, skipping hero stats");
				loading.set(false);
				return;
			};
			let result = load_hero_stats(&BrowserClient, &DomUi::new(), &endpoints, &q, PROGRESS_ID).await;
			stats.set(result);
			loading.set(false);
		});
	});

	view! {
		<div class="hero-stats">
			<h1>"Hero statistics"</h1>
			<div class="series-actions">
				{series.into_iter().map(|id| view! { <SeriesFetchButton id=id /> }).collect_view()}
			</div>
			<div id=PROGRESS_ID></div>
			{move || {
				if !has_query {
					return view! { <p class="text-muted">"Missing type_obj or id_obj parameter"</p> }
						.into_any();
				}
				if loading.get() {
					return ().into_any();
				}
				match stats.get() {
					Some(stats) => view! { <HeroCharts stats=stats /> }.into_any(),
					None => view! { <p class="text-muted">"No hero data"</p> }.into_any(),
				}
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn series_ids_skip_non_numeric() {
		assert_eq!(series_ids("series=3&series=x&type_obj=team&series=9"), vec![3, 9]);
		assert!(series_ids("").is_empty());
	}
}
