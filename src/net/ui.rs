use log::warn;
use web_sys::{Document, Element};

const PROGRESS_BAR_HTML: &str = r#"<div class="progress-bar progress-bar-striped progress-bar-animated" role="progressbar" aria-valuenow="75" aria-valuemin="0" aria-valuemax="100" style="width: 100%"></div>"#;

/// Outcome shown on a fetch button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
	/// The backend answered without an error.
	Success,
	/// Transport failure or an `error` payload.
	Danger,
}

impl FetchStatus {
	/// Bootstrap button class for this outcome.
	pub fn class(self) -> &'static str {
		match self {
			Self::Success => "btn-success",
			Self::Danger => "btn-danger",
		}
	}

	/// The other outcome, whose class is removed.
	pub fn opposite(self) -> Self {
		match self {
			Self::Success => Self::Danger,
			Self::Danger => Self::Success,
		}
	}
}

/// DOM id of the refresh button for series `id`.
pub fn fetch_button_id(id: u64) -> String {
	format!("fetch-button-{id}")
}

/// Page feedback the fetch helpers drive.
pub trait FetchUi {
	/// Recolour the `fetch-button-{id}` button.
	fn set_button_status(&self, id: u64, status: FetchStatus);
	/// Turn the element into a progress bar. False if it does not exist.
	fn show_progress(&self, element_id: &str) -> bool;
	/// Remove the progress element from the page.
	fn remove_progress(&self, element_id: &str);
}

/// Shows a progress bar for as long as it is alive.
pub struct ProgressGuard<'a, U: FetchUi + ?Sized> {
	ui: &'a U,
	element_id: String,
	shown: bool,
}

impl<'a, U: FetchUi + ?Sized> ProgressGuard<'a, U> {
	/// Show the progress bar in `element_id`; a missing element is logged.
	pub fn show(ui: &'a U, element_id: &str) -> Self {
		let shown = ui.show_progress(element_id);
		if !shown {
			warn!("progress element #{element_id} not found");
		}
		Self {
			ui,
			element_id: element_id.to_owned(),
			shown,
		}
	}
}

impl<U: FetchUi + ?Sized> Drop for ProgressGuard<'_, U> {
	fn drop(&mut self) {
		if self.shown {
			self.ui.remove_progress(&self.element_id);
		}
	}
}

/// [`FetchUi`] over the live document.
#[derive(Clone, Debug, Default)]
pub struct DomUi {
	document: Option<Document>,
}

impl DomUi {
	/// Bind to the current window's document, if any.
	pub fn new() -> Self {
		Self {
			document: web_sys::window().and_then(|w| w.document()),
		}
	}

	fn element(&self, id: &str) -> Option<Element> {
		self.document.as_ref()?.get_element_by_id(id)
	}
}

impl FetchUi for DomUi {
	fn set_button_status(&self, id: u64, status: FetchStatus) {
		let button_id = fetch_button_id(id);
		let Some(button) = self.element(&button_id) else {
			warn!("button #{button_id} not found");
			return;
		};
		let classes = button.class_list();
		if let Err(e) = classes
			.remove_1(status.opposite().class())
			.and_then(|_| classes.add_1(status.class()))
		{
			warn!("could not restyle #{button_id}: {e:?}");
		}
	}

	fn show_progress(&self, element_id: &str) -> bool {
		let Some(el) = self.element(element_id) else {
			return false;
		};
		if let Err(e) = el.class_list().add_1("progress") {
			warn!("could not mark #{element_id} as progress: {e:?}");
		}
		el.set_inner_html(PROGRESS_BAR_HTML);
		true
	}

	fn remove_progress(&self, element_id: &str) {
		if let Some(el) = self.element(element_id) {
			el.remove();
		}
	}
}
