//! Band and linear scales for the chart axes.

/// Evenly spaced categorical bands over a pixel range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale<K> {
	domain: Vec<K>,
	range: (f64, f64),
	padding_inner: f64,
	padding_outer: f64,
	align: f64,
	step: f64,
	bandwidth: f64,
	start: f64,
}

impl<K: PartialEq + Clone> BandScale<K> {
	pub fn new(domain: Vec<K>, range: (f64, f64), padding: f64) -> Self {
		let mut scale = Self {
			domain,
			range,
			padding_inner: padding,
			padding_outer: padding,
			align: 0.5,
			step: 0.0,
			bandwidth: 0.0,
			start: 0.0,
		};
		scale.rescale();
		scale
	}

	fn rescale(&mut self) {
		let n = self.domain.len() as f64;
		let (r0, r1) = self.range;
		let (start, stop) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
		self.step =
			(stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
		self.start = start + (stop - start - self.step * (n - self.padding_inner)) * self.align;
		self.bandwidth = self.step * (1.0 - self.padding_inner);
	}

	/// Rebuild the bands over a new pixel range, keeping domain and padding.
	pub fn set_range(&mut self, range: (f64, f64)) {
		self.range = range;
		self.rescale();
	}

	pub fn range(&self) -> (f64, f64) {
		self.range
	}

	pub fn domain(&self) -> &[K] {
		&self.domain
	}

	pub fn bandwidth(&self) -> f64 {
		self.bandwidth
	}

	pub fn step(&self) -> f64 {
		self.step
	}

	/// Left edge of the band for `key`.
	pub fn position(&self, key: &K) -> Option<f64> {
		let i = self.domain.iter().position(|k| k == key)?;
		let n = self.domain.len();
		let reversed = self.range.1 < self.range.0;
		let slot = if reversed { n - 1 - i } else { i };
		Some(self.start + self.step * slot as f64)
	}

	/// Centre of the band for `key`, where axis ticks sit.
	pub fn center(&self, key: &K) -> Option<f64> {
		self.position(key).map(|x| x + self.bandwidth / 2.0)
	}
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Step between "nice" ticks covering `[start, stop]` in about `count` steps.
///
/// Positive results are the step itself; negative results encode `1 / -step`
/// for sub-unit steps so that tick values stay exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
	let step = (stop - start) / count.max(1) as f64;
	if !(step > 0.0) || !step.is_finite() {
		return 0.0;
	}
	let power = step.log10().floor();
	let error = step / 10f64.powf(power);
	let factor = if error >= E10 {
		10.0
	} else if error >= E5 {
		5.0
	} else if error >= E2 {
		2.0
	} else {
		1.0
	};
	if power >= 0.0 {
		factor * 10f64.powf(power)
	} else {
		-10f64.powf(-power) / factor
	}
}

/// Tick values for `[start, stop]`, about `count` of them.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
	if start == stop {
		return vec![start];
	}
	let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
	let step = tick_increment(lo, hi, count);
	let mut values = if step > 0.0 {
		let (i0, i1) = ((lo / step).ceil() as i64, (hi / step).floor() as i64);
		(i0..=i1).map(|i| i as f64 * step).collect::<Vec<_>>()
	} else if step < 0.0 {
		let inv = -step;
		let (i0, i1) = ((lo * inv).ceil() as i64, (hi * inv).floor() as i64);
		(i0..=i1).map(|i| i as f64 / inv).collect::<Vec<_>>()
	} else {
		Vec::new()
	};
	if stop < start {
		values.reverse();
	}
	values
}

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn domain(&self) -> (f64, f64) {
		self.domain
	}

	/// Extend the domain outward to round tick values.
	pub fn nice(mut self, count: usize) -> Self {
		let (mut start, mut stop) = self.domain;
		let flipped = stop < start;
		if flipped {
			std::mem::swap(&mut start, &mut stop);
		}
		let mut prestep = None;
		for _ in 0..10 {
			let step = tick_increment(start, stop, count);
			if prestep == Some(step) {
				break;
			}
			if step > 0.0 {
				start = (start / step).floor() * step;
				stop = (stop / step).ceil() * step;
			} else if step < 0.0 {
				start = (start * step).ceil() / step;
				stop = (stop * step).floor() / step;
			} else {
				break;
			}
			prestep = Some(step);
		}
		self.domain = if flipped { (stop, start) } else { (start, stop) };
		self
	}

	pub fn scale(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		if d1 == d0 {
			return (r0 + r1) / 2.0;
		}
		r0 + (value - d0) / (d1 - d0) * (r1 - r0)
	}

	pub fn ticks(&self, count: usize) -> Vec<f64> {
		ticks(self.domain.0, self.domain.1, count)
	}
}

/// Axis label for a tick value: integers without a fraction, others trimmed.
pub fn format_tick(value: f64) -> String {
	if value.fract() == 0.0 {
		format!("{}", value as i64)
	} else {
		let s = format!("{value:.6}");
		s.trim_end_matches('0').trim_end_matches('.').to_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn band_scale_matches_padded_layout() {
		let scale = BandScale::new(vec!["a", "b", "c", "d"], (40.0, 450.0), 0.1);
		// step = 410 / (4 - 0.1 + 0.2)
		let step = 410.0 / 4.1;
		assert!((scale.step() - step).abs() < 1e-9);
		assert!((scale.bandwidth() - step * 0.9).abs() < 1e-9);
		let first = scale.position(&"a").unwrap();
		assert!((first - (40.0 + step * 0.1)).abs() < 1e-9);
		let last = scale.position(&"d").unwrap();
		assert!((last + scale.bandwidth() - (450.0 - step * 0.1)).abs() < 1e-9);
		assert_eq!(scale.position(&"z"), None);
	}

	#[test]
	fn band_scale_rescales_with_range() {
		let mut scale = BandScale::new(vec![1, 2], (0.0, 100.0), 0.1);
		let before = scale.bandwidth();
		scale.set_range((0.0, 200.0));
		assert!((scale.bandwidth() - before * 2.0).abs() < 1e-9);
	}

	#[test]
	fn nice_rounds_domain_outward() {
		assert_eq!(LinearScale::new((0.0, 37.0), (210.0, 20.0)).nice(10).domain(), (0.0, 40.0));
		assert_eq!(LinearScale::new((0.0, 0.93), (1.0, 0.0)).nice(10).domain(), (0.0, 1.0));
		assert_eq!(LinearScale::new((0.0, 123.0), (1.0, 0.0)).nice(10).domain(), (0.0, 130.0));
	}

	#[test]
	fn linear_scale_maps_inverted_range() {
		let y = LinearScale::new((0.0, 40.0), (210.0, 20.0));
		assert_eq!(y.scale(0.0), 210.0);
		assert_eq!(y.scale(40.0), 20.0);
		assert_eq!(y.scale(20.0), 115.0);
	}

	#[test]
	fn ticks_cover_domain() {
		assert_eq!(ticks(0.0, 40.0, 10), vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0]);
		assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
	}

	#[test]
	fn tick_labels_drop_trailing_zeros() {
		assert_eq!(format_tick(40.0), "40");
		assert_eq!(format_tick(0.2), "0.2");
	}
}
