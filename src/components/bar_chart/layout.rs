use serde::Deserialize;

use super::zoom::{Extent, ZoomBehavior, ZoomTransform};
use crate::components::scale::{BandScale, LinearScale, format_tick};

/// One ranked hero for the bar chart.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BarDatum {
	/// Band key on the x-axis.
	pub id: u64,
	/// Bar height in data units.
	pub count: f64,
	/// Tick image under the bar.
	pub image: String,
}

/// Size, margins and zoom limits of the bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarConfig {
	/// ViewBox width.
	pub width: f64,
	/// ViewBox height.
	pub height: f64,
	/// Space above the plot, mirrored below the x-axis for the pan limit.
	pub margin_top: f64,
	/// Space right of the last band.
	pub margin_right: f64,
	/// Leaves room for the tick images under the axis.
	pub margin_bottom: f64,
	/// Room for the y-axis labels.
	pub margin_left: f64,
	/// How many of the highest counts are drawn.
	pub top_n: usize,
	/// Unzoomed tick image width and height.
	pub tick_image: (f64, f64),
	/// Upper bound of the zoom scale.
	pub max_zoom: f64,
}

impl Default for BarConfig {
	fn default() -> Self {
		Self {
			width: 450.0,
			height: 250.0,
			margin_top: 20.0,
			margin_right: 0.0,
			margin_bottom: 40.0,
			margin_left: 40.0,
			top_n: 8,
			tick_image: (50.0, 30.0),
			max_zoom: 8.0,
		}
	}
}

impl BarConfig {
	/// Plot area corners, also the pan limit.
	pub fn plot_extent(&self) -> Extent {
		[
			[self.margin_left, self.margin_top],
			[self.width - self.margin_right, self.height - self.margin_top],
		]
	}

	/// Zoom behaviour limited to `[1, max_zoom]` and the plot area.
	pub fn zoom(&self) -> ZoomBehavior {
		ZoomBehavior::new(self.plot_extent(), (1.0, self.max_zoom))
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
	pub id: u64,
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// X-axis tick with the hero image that replaces its label.
#[derive(Clone, Debug, PartialEq)]
pub struct XTick {
	pub id: u64,
	pub position: f64,
	pub href: String,
	pub image_x: f64,
	pub image_y: f64,
	pub image_width: f64,
	pub image_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YTick {
	pub label: String,
	pub position: f64,
}

/// Top-N bar chart: band x-axis keyed by id, linear y-axis from zero.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
	pub config: BarConfig,
	data: Vec<BarDatum>,
	x: BandScale<u64>,
	y: LinearScale,
	zoomed: bool,
}

impl BarChart {
	/// Sort `data` in place by descending count (stable) and keep the top N.
	pub fn new(data: &mut [BarDatum], config: BarConfig) -> Self {
		data.sort_by(|a, b| b.count.total_cmp(&a.count));
		let top: Vec<BarDatum> = data.iter().take(config.top_n).cloned().collect();

		let x = BandScale::new(
			top.iter().map(|d| d.id).collect(),
			(config.margin_left, config.width - config.margin_right),
			0.1,
		);
		let max = top.iter().map(|d| d.count).fold(0.0, f64::max);
		let domain = if max > 0.0 { (0.0, max) } else { (0.0, 1.0) };
		let y = LinearScale::new(domain, (config.height - config.margin_bottom, config.margin_top)).nice(10);

		Self {
			config,
			data: top,
			x,
			y,
			zoomed: false,
		}
	}

	pub fn data(&self) -> &[BarDatum] {
		&self.data
	}

	pub fn y_domain(&self) -> (f64, f64) {
		self.y.domain()
	}

	/// Re-lay the x-axis under a zoom transform of the plot.
	pub fn apply_zoom(&mut self, t: &ZoomTransform) {
		let (r0, r1) = (self.config.margin_left, self.config.width - self.config.margin_right);
		self.x.set_range((t.apply_x(r0), t.apply_x(r1)));
		self.zoomed = *t != ZoomTransform::IDENTITY;
	}

	pub fn bars(&self) -> Vec<BarRect> {
		let base = self.y.scale(0.0);
		self.data
			.iter()
			.filter_map(|d| {
				let top = self.y.scale(d.count);
				Some(BarRect {
					id: d.id,
					x: self.x.position(&d.id)?,
					y: top,
					width: self.x.bandwidth(),
					height: base - top,
				})
			})
			.collect()
	}

	pub fn x_ticks(&self) -> Vec<XTick> {
		let (width, height) = self.config.tick_image;
		let width = if self.zoomed { self.x.bandwidth() } else { width };
		self.x
			.domain()
			.iter()
			.filter_map(|id| {
				let datum = self.data.iter().find(|d| d.id == *id)?;
				Some(XTick {
					id: *id,
					position: self.x.center(id)?,
					href: datum.image.clone(),
					image_x: -width / 2.0,
					image_y: 10.0,
					image_width: width,
					image_height: height,
				})
			})
			.collect()
	}

	/// Baseline of the x-axis, spanning the (possibly zoomed) band range.
	pub fn x_axis_path(&self) -> String {
		let (r0, r1) = self.x.range();
		format!("M{r0},0H{r1}")
	}

	pub fn x_axis_offset(&self) -> f64 {
		self.config.height - self.config.margin_bottom
	}

	pub fn y_ticks(&self) -> Vec<YTick> {
		self.y
			.ticks(10)
			.into_iter()
			.map(|v| YTick {
				label: format_tick(v),
				position: self.y.scale(v),
			})
			.collect()
	}
}
