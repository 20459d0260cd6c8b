use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Map a pointer event into viewBox coordinates of the element the handler
/// is attached to, accounting for CSS scaling of the SVG.
pub fn viewbox_point(ev: &MouseEvent, width: f64, height: f64) -> Option<(f64, f64)> {
	let target: Element = ev.current_target()?.dyn_into().ok()?;
	let rect = target.get_bounding_client_rect();
	if rect.width() <= 0.0 || rect.height() <= 0.0 {
		return None;
	}
	Some((
		(ev.client_x() as f64 - rect.left()) * width / rect.width(),
		(ev.client_y() as f64 - rect.top()) * height / rect.height(),
	))
}
