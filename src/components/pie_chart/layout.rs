use serde::Deserialize;

use crate::components::color::OrdinalPalette;
use crate::components::shape::{Arc, pie};

/// One category of the donut chart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PieSlice {
	/// Colour key and title.
	pub name: String,
	/// Slice value.
	pub count: f64,
	/// Image drawn on large slices.
	pub image: String,
	/// Image size; slices at or below the threshold get no image.
	pub size: f64,
}

/// Geometry of the donut chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieConfig {
	/// ViewBox width.
	pub width: f64,
	/// ViewBox height.
	pub height: f64,
	/// Inner radius as a fraction of the outer radius.
	pub inner_ratio: f64,
	/// Minimum slice `size` that gets an image.
	pub image_threshold: f64,
	/// Width over height of the slice images.
	pub image_aspect: f64,
}

impl Default for PieConfig {
	fn default() -> Self {
		Self {
			width: 700.0,
			height: 700.0,
			inner_ratio: 0.7,
			image_threshold: 40.0,
			image_aspect: 1.77,
		}
	}
}

impl PieConfig {
	/// Outer radius of the ring.
	pub fn radius(&self) -> f64 {
		self.width.min(self.height) / 3.0
	}

	/// ViewBox centred on the origin.
	pub fn view_box(&self) -> String {
		format!(
			"{} {} {} {}",
			-self.width / 2.0,
			-self.height / 2.0,
			self.width,
			self.height
		)
	}
}

/// Circular-clipped image placed near a slice centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceImage {
	pub href: String,
	pub width: f64,
	pub height: f64,
	pub x: f64,
	pub y: f64,
	pub clip_path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliceLayout {
	pub name: String,
	pub count: f64,
	pub color: String,
	pub path: String,
	pub title: String,
	pub centroid: (f64, f64),
	pub clip_id: String,
	pub clip_radius: f64,
	pub image: Option<SliceImage>,
}

impl SliceLayout {
	pub fn translate(&self) -> String {
		format!("translate({},{})", self.centroid.0, self.centroid.1)
	}
}

/// Sort `slices` in place by descending count, then assign colours, angles
/// and image placement in that order.
pub fn layout(slices: &mut [PieSlice], config: &PieConfig) -> Vec<SliceLayout> {
	slices.sort_by(|a, b| b.count.total_cmp(&a.count));

	let radius = config.radius();
	let arc = Arc::new(radius * config.inner_ratio, radius - 1.0);
	let palette = OrdinalPalette::spectral(slices.iter().map(|s| s.name.as_str()));
	let values: Vec<f64> = slices.iter().map(|s| s.count).collect();

	pie(&values, 1.0 / radius)
		.iter()
		.map(|a| {
			let slice = &slices[a.index];
			let clip_id = format!("clip-{}", a.index);
			let image = (slice.size > config.image_threshold).then(|| SliceImage {
				href: slice.image.clone(),
				width: slice.size,
				height: slice.size / config.image_aspect,
				x: -0.5 * slice.size - 9.12,
				y: -0.4 * slice.size + 9.5,
				clip_path: format!("url(#{clip_id})"),
			});
			SliceLayout {
				name: slice.name.clone(),
				count: slice.count,
				color: palette.color(&slice.name).unwrap_or_default().to_owned(),
				path: arc.path(a),
				title: format!("{}: {}", slice.name, slice.count),
				centroid: arc.centroid(a),
				clip_id,
				clip_radius: slice.size / 4.0,
				image,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::color::interpolate_spectral;

	fn slice(name: &str, count: f64, size: f64) -> PieSlice {
		PieSlice {
			name: name.into(),
			count,
			image: format!("/img/{name}.png"),
			size,
		}
	}

	#[test]
	fn sorts_input_and_draws_in_descending_order() {
		let mut data = vec![slice("axe", 2.0, 10.0), slice("lina", 9.0, 10.0), slice("pudge", 5.0, 10.0)];
		let out = layout(&mut data, &PieConfig::default());
		let names: Vec<&str> = data.iter().map(|s| s.name.as_str()).collect();
		assert_eq!(names, ["lina", "pudge", "axe"]);
		let drawn: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
		assert_eq!(drawn, names);
		// colours follow the same order, first gets the reversed ramp head
		assert_eq!(out[0].color, interpolate_spectral(0.9));
		assert_eq!(out[2].color, interpolate_spectral(0.1));
	}

	#[test]
	fn same_names_give_same_colors() {
		let mut a = vec![slice("axe", 2.0, 10.0), slice("lina", 9.0, 10.0)];
		let mut b = vec![slice("lina", 9.0, 10.0), slice("axe", 2.0, 10.0)];
		let (la, lb) = (layout(&mut a, &PieConfig::default()), layout(&mut b, &PieConfig::default()));
		assert_eq!(la, lb);
	}

	#[test]
	fn image_only_above_threshold() {
		let mut data = vec![slice("axe", 3.0, 40.0), slice("lina", 2.0, 41.0)];
		let out = layout(&mut data, &PieConfig::default());
		assert!(out[0].image.is_none());
		let img = out[1].image.as_ref().unwrap();
		assert_eq!(img.width, 41.0);
		assert!((img.height - 41.0 / 1.77).abs() < 1e-9);
		assert!((img.x - (-0.5 * 41.0 - 9.12)).abs() < 1e-9);
		assert!((img.y - (-0.4 * 41.0 + 9.5)).abs() < 1e-9);
		assert_eq!(img.clip_path, "url(#clip-1)");
		assert_eq!(out[1].clip_radius, 10.25);
	}

	#[test]
	fn titles_and_ring_geometry() {
		let mut data = vec![slice("axe", 12.0, 10.0), slice("lina", 4.0, 10.0)];
		let config = PieConfig::default();
		let out = layout(&mut data, &config);
		assert_eq!(out[0].title, "axe: 12");
		let r = config.radius();
		let mid = (r * 0.7 + r - 1.0) / 2.0;
		let (x, y) = out[0].centroid;
		assert!(((x * x + y * y).sqrt() - mid).abs() < 1e-9);
		assert_eq!(config.view_box(), "-350 -350 700 700");
	}

	#[test]
	fn empty_input_renders_nothing() {
		let mut data: Vec<PieSlice> = Vec::new();
		assert!(layout(&mut data, &PieConfig::default()).is_empty());
	}
}
