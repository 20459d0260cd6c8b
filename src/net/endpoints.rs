use url::{Url, form_urlencoded};

use super::error::FetchError;

/// Backend routes resolved against the page origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
	origin: Url,
}

impl Endpoints {
	/// Routes under `origin`, e.g. `http://localhost:8000`.
	pub fn new(origin: &str) -> Result<Self, FetchError> {
		Ok(Self {
			origin: Url::parse(origin)?,
		})
	}

	/// Origin of the current page, if running in a browser.
	pub fn from_window() -> Option<Self> {
		let origin = web_sys::window()?.location().origin().ok()?;
		Self::new(&origin).ok()
	}

	/// `/leagues/{id}/series/`.
	pub fn league_series(&self, id: u64) -> Result<Url, FetchError> {
		Ok(self.origin.join(&format!("/leagues/{id}/series/"))?)
	}

	/// `/matches/heroes` with `query` appended verbatim.
	pub fn heroes(&self, query: &str) -> Result<Url, FetchError> {
		let query = query.trim_start_matches('?');
		Ok(self.origin.join(&format!("/matches/heroes?{query}"))?)
	}
}

/// Decoded `key=value` pairs of a URL, for logging.
pub fn query_pairs(url: &Url) -> Vec<(String, String)> {
	url.query_pairs()
		.map(|(k, v)| (k.into_owned(), v.into_owned()))
		.collect()
}

/// Filters understood by `/matches/heroes`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroQuery {
	/// Kind of object the stats are for, e.g. `league`, `team` or `player`.
	pub type_obj: String,
	/// Id of that object.
	pub id_obj: u64,
	/// Restrict to one league.
	pub league_id: Option<u64>,
	/// Restrict to one team.
	pub team_id: Option<u64>,
	/// Only matches starting at or after this time, as the backend formats it.
	pub start_date_time: Option<String>,
	/// Only matches lasting at least this long.
	pub duration_seconds: Option<u64>,
}

impl HeroQuery {
	/// Query for one object with no filters.
	pub fn new(type_obj: impl Into<String>, id_obj: u64) -> Self {
		Self {
			type_obj: type_obj.into(),
			id_obj,
			..Self::default()
		}
	}

	/// Add a league filter.
	pub fn league(mut self, id: u64) -> Self {
		self.league_id = Some(id);
		self
	}

	/// Add a team filter.
	pub fn team(mut self, id: u64) -> Self {
		self.team_id = Some(id);
		self
	}

	/// Add a start time filter.
	pub fn since(mut self, start_date_time: impl Into<String>) -> Self {
		self.start_date_time = Some(start_date_time.into());
		self
	}

	/// Add a minimum duration filter.
	pub fn min_duration(mut self, seconds: u64) -> Self {
		self.duration_seconds = Some(seconds);
		self
	}

	/// Parse a page query string. `type_obj` and a numeric `id_obj` are
	/// required; unknown keys and unparsable filters are ignored.
	pub fn from_query_string(query: &str) -> Option<Self> {
		let mut type_obj = None;
		let mut out = Self::default();
		let mut id_obj = None;
		for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
			match key.as_ref() {
				"type_obj" if !value.is_empty() => type_obj = Some(value.into_owned()),
				"id_obj" => id_obj = value.parse().ok(),
				"league_id" => out.league_id = value.parse().ok(),
				"team_id" => out.team_id = value.parse().ok(),
				"start_date_time" if !value.is_empty() => out.start_date_time = Some(value.into_owned()),
				"duration_seconds" => out.duration_seconds = value.parse().ok(),
				_ => {}
			}
		}
		out.type_obj = type_obj?;
		out.id_obj = id_obj?;
		Some(out)
	}

	/// Encode as a query string without the leading `?`.
	pub fn to_query_string(&self) -> String {
		let mut out = form_urlencoded::Serializer::new(String::new());
		out.append_pair("type_obj", &self.type_obj);
		out.append_pair("id_obj", &self.id_obj.to_string());
		if let Some(id) = self.league_id {
			out.append_pair("league_id", &id.to_string());
		}
		if let Some(id) = self.team_id {
			out.append_pair("team_id", &id.to_string());
		}
		if let Some(ref start) = self.start_date_time {
			out.append_pair("start_date_time", start);
		}
		if let Some(secs) = self.duration_seconds {
			out.append_pair("duration_seconds", &secs.to_string());
		}
		out.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn endpoints() -> Endpoints {
		Endpoints::new("http://localhost:8000").unwrap()
	}

	#[test]
	fn league_series_path() {
		let url = endpoints().league_series(42).unwrap();
		assert_eq!(url.as_str(), "http://localhost:8000/leagues/42/series/");
	}

	#[test]
	fn heroes_appends_query_verbatim() {
		let url = endpoints().heroes("type_obj=team&id_obj=7").unwrap();
		assert_eq!(url.as_str(), "http://localhost:8000/matches/heroes?type_obj=team&id_obj=7");
		let leading = endpoints().heroes("?type_obj=team").unwrap();
		assert_eq!(leading.query(), Some("type_obj=team"));
	}

	#[test]
	fn query_pairs_are_decoded() {
		let url = endpoints().heroes("start_date_time=2024-01-01%2000%3A00").unwrap();
		assert_eq!(
			query_pairs(&url),
			vec![("start_date_time".to_string(), "2024-01-01 00:00".to_string())]
		);
	}

	#[test]
	fn hero_query_serializes_only_set_filters() {
		let q = HeroQuery::new("team", 15).league(16935).min_duration(1200);
		assert_eq!(
			q.to_query_string(),
			"type_obj=team&id_obj=15&league_id=16935&duration_seconds=1200"
		);
		let q = HeroQuery::new("player", 3).since("2024-05-01 10:00");
		assert_eq!(
			q.to_query_string(),
			"type_obj=player&id_obj=3&start_date_time=2024-05-01+10%3A00"
		);
	}

	#[test]
	fn hero_query_parses_page_query() {
		let q = HeroQuery::from_query_string("?type_obj=team&id_obj=15&team_id=x&duration_seconds=900&page=2")
			.unwrap();
		assert_eq!(q, HeroQuery::new("team", 15).min_duration(900));
		let round_trip = HeroQuery::from_query_string(&q.to_query_string()).unwrap();
		assert_eq!(round_trip, q);
	}

	#[test]
	fn hero_query_requires_object() {
		assert_eq!(HeroQuery::from_query_string("type_obj=team"), None);
		assert_eq!(HeroQuery::from_query_string("id_obj=4"), None);
		assert_eq!(HeroQuery::from_query_string(""), None);
	}

	#[test]
	fn bad_origin_is_an_error() {
		assert!(matches!(Endpoints::new("not a url"), Err(FetchError::InvalidUrl(_))));
	}
}
