//! Diverging "Spectral" ramp and the ordinal palette sampled from it.

use std::collections::HashMap;

/// Sample the Spectral ramp at `t` and return it as `#rrggbb`.
pub fn interpolate_spectral(t: f64) -> String {
	format!("#{:x}", colorous::SPECTRAL.eval_continuous(t))
}

/// `n` evenly spaced samples of `interpolator` over `[0, 1]`.
///
/// A single sample is taken at `t = 0`.
pub fn quantize<F: Fn(f64) -> String>(interpolator: F, n: usize) -> Vec<String> {
	match n {
		0 => Vec::new(),
		1 => vec![interpolator(0.0)],
		_ => (0..n)
			.map(|i| interpolator(i as f64 / (n - 1) as f64))
			.collect(),
	}
}

/// Maps category names to palette entries by first-seen position in the domain.
#[derive(Clone, Debug, Default)]
pub struct OrdinalPalette {
	index: HashMap<String, usize>,
	range: Vec<String>,
}

impl OrdinalPalette {
	pub fn new<'a, I: IntoIterator<Item = &'a str>>(domain: I, range: Vec<String>) -> Self {
		let mut index = HashMap::new();
		for name in domain {
			let next = index.len();
			index.entry(name.to_owned()).or_insert(next);
		}
		Self { index, range }
	}

	/// Spectral palette for a domain, clipped to `[0.1, 0.9]` and reversed so
	/// the first category is blue.
	pub fn spectral<'a, I>(domain: I) -> Self
	where
		I: IntoIterator<Item = &'a str> + Clone,
	{
		let n = domain.clone().into_iter().count();
		let mut range = quantize(|t| interpolate_spectral(t * 0.8 + 0.1), n);
		range.reverse();
		Self::new(domain, range)
	}

	pub fn color(&self, name: &str) -> Option<&str> {
		if self.range.is_empty() {
			return None;
		}
		let i = *self.index.get(name)?;
		Some(self.range[i % self.range.len()].as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rgb(hex: &str) -> [i32; 3] {
		assert_eq!(hex.len(), 7, "{hex}");
		let channel = |i: usize| i32::from_str_radix(&hex[i..i + 2], 16).unwrap();
		[channel(1), channel(3), channel(5)]
	}

	fn assert_close(actual: &str, expected: &str) {
		let (a, e) = (rgb(actual), rgb(expected));
		assert!(a.iter().zip(e).all(|(a, e)| (a - e).abs() <= 1), "{actual} vs {expected}");
	}

	#[test]
	fn spectral_runs_red_to_blue() {
		assert!(interpolate_spectral(0.0).starts_with('#'));
		assert_close(&interpolate_spectral(0.0), "#9e0142");
		assert_close(&interpolate_spectral(1.0), "#5e4fa2");
		assert_close(&interpolate_spectral(0.5), "#fbf8b0");
	}

	#[test]
	fn quantize_handles_small_counts() {
		assert!(quantize(interpolate_spectral, 0).is_empty());
		assert_eq!(quantize(interpolate_spectral, 1), vec![interpolate_spectral(0.0)]);
		let three = quantize(interpolate_spectral, 3);
		assert_eq!(three[1], interpolate_spectral(0.5));
		assert_eq!(three[2], interpolate_spectral(1.0));
	}

	#[test]
	fn palette_is_reversed_and_keyed_by_name() {
		let names = ["axe", "lina", "pudge"];
		let palette = OrdinalPalette::spectral(names.iter().copied());
		// reversed: first name gets the sample at t = 0.9
		assert_eq!(palette.color("axe"), Some(interpolate_spectral(0.9).as_str()));
		assert_eq!(palette.color("pudge"), Some(interpolate_spectral(0.1).as_str()));
		assert_eq!(palette.color("mirana"), None);
	}

	#[test]
	fn duplicate_names_share_first_color() {
		let names = ["axe", "lina", "axe"];
		let palette = OrdinalPalette::spectral(names.iter().copied());
		let first = interpolate_spectral(0.9);
		assert_eq!(palette.color("axe"), Some(first.as_str()));
	}
}
