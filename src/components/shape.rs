//! Pie layout and annular-sector path generation.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

const EPSILON: f64 = 1e-12;

/// Angular extent assigned to one datum by [`pie`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieArc {
	/// Position of the datum in the input slice.
	pub index: usize,
	pub value: f64,
	pub start_angle: f64,
	pub end_angle: f64,
	pub pad_angle: f64,
}

/// Partition a full turn proportionally to `values`, in input order.
///
/// Angles are in radians, clockwise from twelve o'clock. Non-positive values
/// get an empty sector but still consume padding.
pub fn pie(values: &[f64], pad_angle: f64) -> Vec<PieArc> {
	let n = values.len();
	if n == 0 {
		return Vec::new();
	}
	let sum: f64 = values.iter().filter(|v| **v > 0.0).sum();
	let pad = (TAU / n as f64).min(pad_angle);
	let k = if sum > 0.0 { (TAU - n as f64 * pad) / sum } else { 0.0 };

	let mut a0 = 0.0;
	values
		.iter()
		.enumerate()
		.map(|(index, &value)| {
			let a1 = a0 + if value > 0.0 { value * k } else { 0.0 } + pad;
			let arc = PieArc {
				index,
				value,
				start_angle: a0,
				end_angle: a1,
				pad_angle: pad,
			};
			a0 = a1;
			arc
		})
		.collect()
}

/// Ring sector generator with fixed radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
	pub inner_radius: f64,
	pub outer_radius: f64,
}

impl Arc {
	pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
		Self {
			inner_radius,
			outer_radius,
		}
	}

	/// Midpoint of the sector, halfway between the radii and the angles.
	pub fn centroid(&self, arc: &PieArc) -> (f64, f64) {
		let r = (self.inner_radius + self.outer_radius) / 2.0;
		let a = (arc.start_angle + arc.end_angle) / 2.0 - FRAC_PI_2;
		(a.cos() * r, a.sin() * r)
	}

	/// SVG path data for the sector, with padding applied along the pad radius.
	pub fn path(&self, arc: &PieArc) -> String {
		let mut path = PathBuilder::default();
		let (mut r0, mut r1) = (self.inner_radius, self.outer_radius);
		if r1 < r0 {
			std::mem::swap(&mut r0, &mut r1);
		}
		let a0 = arc.start_angle - FRAC_PI_2;
		let a1 = arc.end_angle - FRAC_PI_2;
		let da = (a1 - a0).abs();
		let cw = a1 > a0;

		if !(r1 > EPSILON) {
			path.move_to(0.0, 0.0);
		} else if da > TAU - EPSILON {
			path.move_to(r1 * a0.cos(), r1 * a0.sin());
			path.arc(r1, a0, a1, !cw);
			if r0 > EPSILON {
				path.move_to(r0 * a1.cos(), r0 * a1.sin());
				path.arc(r0, a1, a0, cw);
			}
		} else {
			let (mut a01, mut a11, mut a00, mut a10) = (a0, a1, a0, a1);
			let (mut da0, mut da1) = (da, da);
			let ap = arc.pad_angle / 2.0;
			let rp = (r0 * r0 + r1 * r1).sqrt();

			if ap > EPSILON && rp > EPSILON {
				let sign = if cw { 1.0 } else { -1.0 };
				let p0 = if r0 > EPSILON { (rp / r0 * ap.sin()).min(1.0).asin() } else { 0.0 };
				let p1 = (rp / r1 * ap.sin()).min(1.0).asin();
				da0 -= p0 * 2.0;
				if da0 > EPSILON {
					a00 += p0 * sign;
					a10 -= p0 * sign;
				} else {
					da0 = 0.0;
					a00 = (a0 + a1) / 2.0;
					a10 = a00;
				}
				da1 -= p1 * 2.0;
				if da1 > EPSILON {
					a01 += p1 * sign;
					a11 -= p1 * sign;
				} else {
					da1 = 0.0;
					a01 = (a0 + a1) / 2.0;
					a11 = a01;
				}
			}

			path.move_to(r1 * a01.cos(), r1 * a01.sin());
			if da1 > EPSILON {
				path.arc(r1, a01, a11, !cw);
			}
			if !(r0 > EPSILON) || !(da0 > EPSILON) {
				path.line_to(r0 * a10.cos(), r0 * a10.sin());
			} else {
				path.arc(r0, a10, a00, cw);
			}
		}
		path.close();
		path.finish()
	}
}

fn num(v: f64) -> String {
	let rounded = (v * 1000.0).round() / 1000.0;
	if rounded == 0.0 {
		return "0".to_owned();
	}
	let s = format!("{rounded:.3}");
	s.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Minimal SVG path writer for circular arcs around the origin.
#[derive(Default)]
struct PathBuilder {
	data: String,
	current: Option<(f64, f64)>,
}

impl PathBuilder {
	fn move_to(&mut self, x: f64, y: f64) {
		let _ = write!(self.data, "M{},{}", num(x), num(y));
		self.current = Some((x, y));
	}

	fn line_to(&mut self, x: f64, y: f64) {
		let _ = write!(self.data, "L{},{}", num(x), num(y));
		self.current = Some((x, y));
	}

	fn close(&mut self) {
		if self.current.is_some() {
			self.data.push('Z');
		}
	}

	fn arc(&mut self, r: f64, a0: f64, a1: f64, ccw: bool) {
		let (x0, y0) = (r * a0.cos(), r * a0.sin());
		let sweep = if ccw { 0 } else { 1 };
		let mut da = if ccw { a0 - a1 } else { a1 - a0 };

		match self.current {
			None => self.move_to(x0, y0),
			Some((cx, cy)) if (cx - x0).abs() > 1e-6 || (cy - y0).abs() > 1e-6 => {
				self.line_to(x0, y0)
			}
			_ => {}
		}
		if r == 0.0 {
			return;
		}
		if da < 0.0 {
			da = da % TAU + TAU;
		}
		let r_s = num(r);
		if da > TAU - 1e-6 {
			let _ = write!(
				self.data,
				"A{r_s},{r_s},0,1,{sweep},{},{}A{r_s},{r_s},0,1,{sweep},{},{}",
				num(-x0),
				num(-y0),
				num(x0),
				num(y0)
			);
			self.current = Some((x0, y0));
		} else if da > 1e-6 {
			let (x1, y1) = (r * a1.cos(), r * a1.sin());
			let large = if da >= PI { 1 } else { 0 };
			let _ = write!(
				self.data,
				"A{r_s},{r_s},0,{large},{sweep},{},{}",
				num(x1),
				num(y1)
			);
			self.current = Some((x1, y1));
		}
	}

	fn finish(self) -> String {
		self.data
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pie_spans_full_turn_with_padding() {
		let arcs = pie(&[3.0, 1.0], 0.01);
		assert_eq!(arcs.len(), 2);
		assert_eq!(arcs[0].start_angle, 0.0);
		assert!((arcs[1].end_angle - TAU).abs() < 1e-9);
		// 3:1 split of what is left after padding
		let span0 = arcs[0].end_angle - arcs[0].start_angle - arcs[0].pad_angle;
		let span1 = arcs[1].end_angle - arcs[1].start_angle - arcs[1].pad_angle;
		assert!((span0 / span1 - 3.0).abs() < 1e-9);
	}

	#[test]
	fn pie_of_zeroes_only_pads() {
		let arcs = pie(&[0.0, 0.0], 0.1);
		assert!((arcs[1].end_angle - 0.2).abs() < 1e-12);
	}

	#[test]
	fn centroid_of_first_quadrant() {
		let arc = Arc::new(70.0, 100.0);
		let quarter = PieArc {
			index: 0,
			value: 1.0,
			start_angle: 0.0,
			end_angle: FRAC_PI_2,
			pad_angle: 0.0,
		};
		let (x, y) = arc.centroid(&quarter);
		let r = 85.0 * std::f64::consts::FRAC_1_SQRT_2;
		assert!((x - r).abs() < 1e-9);
		assert!((y + r).abs() < 1e-9);
	}

	#[test]
	fn ring_sector_path_has_two_arcs() {
		let arc = Arc::new(70.0, 100.0);
		let quarter = PieArc {
			index: 0,
			value: 1.0,
			start_angle: 0.0,
			end_angle: FRAC_PI_2,
			pad_angle: 0.0,
		};
		let d = arc.path(&quarter);
		assert!(d.starts_with("M0,-100A100,100,0,0,1,100,0"));
		assert!(d.contains("L70,0A70,70,0,0,0,0,-70"));
		assert!(d.ends_with('Z'));
	}

	#[test]
	fn full_ring_draws_both_circles() {
		let arc = Arc::new(70.0, 100.0);
		let whole = PieArc {
			index: 0,
			value: 1.0,
			start_angle: 0.0,
			end_angle: TAU,
			pad_angle: 0.0,
		};
		let d = arc.path(&whole);
		assert_eq!(d.matches('A').count(), 4);
		assert_eq!(d.matches('M').count(), 2);
	}
}
