//! Fetch helpers behind the league and hero pages.
//!
//! Every failure (transport, undecodable body, or a body carrying an
//! `error` field) ends up as the same signal for the page: a red button for
//! the series refresh, `None` for the hero stats.

use log::{debug, error};
use serde_json::Value;

use super::client::HttpClient;
use super::endpoints::{Endpoints, HeroQuery, query_pairs};
use super::error::FetchError;
use super::types::HeroStats;
use super::ui::{FetchStatus, FetchUi, ProgressGuard};

/// JS-style truthiness of the payload's `error` field.
fn error_message(body: &Value) -> Option<String> {
	match body.get("error")? {
		Value::Null | Value::Bool(false) => None,
		Value::String(s) if s.is_empty() => None,
		Value::Number(n) if n.as_f64() == Some(0.0) => None,
		Value::String(s) => Some(s.clone()),
		other => Some(other.to_string()),
	}
}

fn check_body(body: Value) -> Result<Value, FetchError> {
	match error_message(&body) {
		Some(msg) => Err(FetchError::Server(msg)),
		None => Ok(body),
	}
}

/// Request a series refresh and colour `fetch-button-{id}` with the outcome.
pub async fn fetch_league_series<C, U>(client: &C, ui: &U, endpoints: &Endpoints, id: u64)
where
	C: HttpClient + ?Sized,
	U: FetchUi + ?Sized,
{
	debug!("fetching series {id}");
	let result = match endpoints.league_series(id) {
		Ok(url) => client.get_json(url.as_str()).await.and_then(check_body),
		Err(e) => Err(e),
	};
	let status = match result {
		Ok(_) => FetchStatus::Success,
		Err(e) => {
			error!("Error fetching team data: {e}");
			FetchStatus::Danger
		}
	};
	ui.set_button_status(id, status);
}

/// Fetch `/matches/heroes?{query}` with a progress bar in `progress_id`.
///
/// Returns the parsed body, or `None` on any failure. The progress bar is
/// removed before this returns, whatever the outcome.
pub async fn fetch_heroes<C, U>(
	client: &C,
	ui: &U,
	endpoints: &Endpoints,
	query: &str,
	progress_id: &str,
) -> Option<Value>
where
	C: HttpClient + ?Sized,
	U: FetchUi + ?Sized,
{
	let _progress = ProgressGuard::show(ui, progress_id);
	let result = match endpoints.heroes(query) {
		Ok(url) => {
			debug!("fetching heroes with {:?}", query_pairs(&url));
			client.get_json(url.as_str()).await.and_then(check_body)
		}
		Err(e) => Err(e),
	};
	match result {
		Ok(body) => Some(body),
		Err(e) => {
			error!("Error fetching heroes data: {e}");
			None
		}
	}
}

/// [`fetch_heroes`] for a typed query, decoded into [`HeroStats`].
pub async fn load_hero_stats<C, U>(
	client: &C,
	ui: &U,
	endpoints: &Endpoints,
	query: &HeroQuery,
	progress_id: &str,
) -> Option<HeroStats>
where
	C: HttpClient + ?Sized,
	U: FetchUi + ?Sized,
{
	let body = fetch_heroes(client, ui, endpoints, &query.to_query_string(), progress_id).await?;
	HeroStats::from_value(body)
		.map_err(|e| error!("Error decoding heroes data: {e}"))
		.ok()
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::{BTreeSet, HashMap};

	use async_trait::async_trait;
	use futures::executor::block_on;
	use serde_json::json;

	use super::*;

	struct StubClient {
		response: Result<Value, FetchError>,
		requested: RefCell<Vec<String>>,
	}

	impl StubClient {
		fn new(response: Result<Value, FetchError>) -> Self {
			Self {
				response,
				requested: RefCell::new(Vec::new()),
			}
		}
	}

	#[async_trait(?Send)]
	impl HttpClient for StubClient {
		async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
			self.requested.borrow_mut().push(url.to_owned());
			self.response.clone()
		}
	}

	/// In-memory page: button class sets and the ids of live elements.
	#[derive(Default)]
	struct FakePage {
		buttons: RefCell<HashMap<u64, BTreeSet<&'static str>>>,
		elements: RefCell<BTreeSet<String>>,
		progress_shown: RefCell<Vec<String>>,
	}

	impl FakePage {
		fn with_element(id: &str) -> Self {
			let page = Self::default();
			page.elements.borrow_mut().insert(id.to_owned());
			page
		}

		fn classes(&self, id: u64) -> BTreeSet<&'static str> {
			self.buttons.borrow().get(&id).cloned().unwrap_or_default()
		}

		fn has_element(&self, id: &str) -> bool {
			self.elements.borrow().contains(id)
		}
	}

	impl FetchUi for FakePage {
		fn set_button_status(&self, id: u64, status: FetchStatus) {
			let mut buttons = self.buttons.borrow_mut();
			let classes = buttons.entry(id).or_default();
			classes.remove(status.opposite().class());
			classes.insert(status.class());
		}

		fn show_progress(&self, element_id: &str) -> bool {
			if !self.has_element(element_id) {
				return false;
			}
			self.progress_shown.borrow_mut().push(element_id.to_owned());
			true
		}

		fn remove_progress(&self, element_id: &str) {
			self.elements.borrow_mut().remove(element_id);
		}
	}

	fn endpoints() -> Endpoints {
		Endpoints::new("http://localhost").unwrap()
	}

	#[test]
	fn series_error_payload_marks_danger() {
		let (client, page) = (StubClient::new(Ok(json!({"error": "x"}))), FakePage::default());
		block_on(fetch_league_series(&client, &page, &endpoints(), 5));
		assert_eq!(page.classes(5), BTreeSet::from(["btn-danger"]));
		assert_eq!(*client.requested.borrow(), vec!["http://localhost/leagues/5/series/"]);
	}

	#[test]
	fn series_ok_payload_marks_success() {
		let (client, page) = (StubClient::new(Ok(json!({"ok": true}))), FakePage::default());
		block_on(fetch_league_series(&client, &page, &endpoints(), 5));
		assert_eq!(page.classes(5), BTreeSet::from(["btn-success"]));
	}

	#[test]
	fn series_network_failure_marks_danger() {
		let page = FakePage::default();
		let ok = StubClient::new(Ok(json!({"id": 5, "win": null})));
		block_on(fetch_league_series(&ok, &page, &endpoints(), 5));
		let down = StubClient::new(Err(FetchError::Network("refused".into())));
		block_on(fetch_league_series(&down, &page, &endpoints(), 5));
		assert_eq!(page.classes(5), BTreeSet::from(["btn-danger"]));
	}

	#[test]
	fn heroes_success_returns_body_and_removes_progress() {
		let body = json!({"nodes_picks": []});
		let client = StubClient::new(Ok(body.clone()));
		let page = FakePage::with_element("progress-1");
		let out = block_on(fetch_heroes(&client, &page, &endpoints(), "type_obj=team&id_obj=1", "progress-1"));
		assert_eq!(out, Some(body));
		assert_eq!(*page.progress_shown.borrow(), vec!["progress-1"]);
		assert!(!page.has_element("progress-1"));
		assert_eq!(
			*client.requested.borrow(),
			vec!["http://localhost/matches/heroes?type_obj=team&id_obj=1"]
		);
	}

	#[test]
	fn heroes_error_payload_returns_none_and_removes_progress() {
		let client = StubClient::new(Ok(json!({"error": "x"})));
		let page = FakePage::with_element("progress-1");
		let out = block_on(fetch_heroes(&client, &page, &endpoints(), "", "progress-1"));
		assert_eq!(out, None);
		assert!(!page.has_element("progress-1"));
	}

	#[test]
	fn heroes_network_error_returns_none_and_removes_progress() {
		let client = StubClient::new(Err(FetchError::Network("connection refused".into())));
		let page = FakePage::with_element("progress-1");
		let out = block_on(fetch_heroes(&client, &page, &endpoints(), "", "progress-1"));
		assert_eq!(out, None);
		assert!(!page.has_element("progress-1"));
	}

	#[test]
	fn heroes_bad_body_returns_none_and_removes_progress() {
		for err in [FetchError::Decode("eof".into()), FetchError::Status(502)] {
			let client = StubClient::new(Err(err));
			let page = FakePage::with_element("progress-1");
			let out = block_on(fetch_heroes(&client, &page, &endpoints(), "", "progress-1"));
			assert_eq!(out, None);
			assert!(!page.has_element("progress-1"));
		}
	}

	#[test]
	fn missing_progress_element_still_fetches() {
		let client = StubClient::new(Ok(json!([])));
		let page = FakePage::default();
		let out = block_on(fetch_heroes(&client, &page, &endpoints(), "", "nowhere"));
		assert_eq!(out, Some(json!([])));
		assert!(page.progress_shown.borrow().is_empty());
	}

	#[test]
	fn falsy_error_fields_are_not_errors() {
		assert_eq!(error_message(&json!({"error": ""})), None);
		assert_eq!(error_message(&json!({"error": null})), None);
		assert_eq!(error_message(&json!({"error": false})), None);
		assert_eq!(error_message(&json!({"error": 0})), None);
		assert_eq!(error_message(&json!({"error": "boom"})), Some("boom".to_string()));
		assert_eq!(error_message(&json!({"error": {"code": 1}})), Some(r#"{"code":1}"#.to_string()));
	}

	#[test]
	fn typed_load_decodes_stats() {
		let client = StubClient::new(Ok(json!({
			"nodes_picks": [{"id": 1, "name": "Axe", "count": 3, "image": "/axe.png", "size": 50}]
		})));
		let page = FakePage::with_element("p");
		let query = HeroQuery::new("league", 16935);
		let stats = block_on(load_hero_stats(&client, &page, &endpoints(), &query, "p")).unwrap();
		assert_eq!(stats.nodes_picks[0].name, "Axe");
		assert!(!page.has_element("p"));
	}

	#[test]
	fn typed_load_rejects_wrong_shape() {
		let client = StubClient::new(Ok(json!({"nodes_picks": "nope"})));
		let page = FakePage::default();
		let query = HeroQuery::new("league", 1);
		assert_eq!(block_on(load_hero_stats(&client, &page, &endpoints(), &query, "p")), None);
	}
}
