/// Scale and translation applied to the plot, screen = world * k + (x, y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
	pub k: f64,
	pub x: f64,
	pub y: f64,
}

impl Default for ZoomTransform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl ZoomTransform {
	pub const IDENTITY: Self = Self {
		k: 1.0,
		x: 0.0,
		y: 0.0,
	};

	pub fn apply_x(&self, x: f64) -> f64 {
		x * self.k + self.x
	}

	pub fn invert_x(&self, x: f64) -> f64 {
		(x - self.x) / self.k
	}

	pub fn invert_y(&self, y: f64) -> f64 {
		(y - self.y) / self.k
	}

	/// Shift by `(dx, dy)` in world units.
	fn translate(self, dx: f64, dy: f64) -> Self {
		Self {
			x: self.x + self.k * dx,
			y: self.y + self.k * dy,
			..self
		}
	}
}

/// `[[x0, y0], [x1, y1]]` rectangle.
pub type Extent = [[f64; 2]; 2];

/// Wheel zoom and drag pan limited to a scale range and a translate extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBehavior {
	pub scale_extent: (f64, f64),
	/// Viewport rectangle, in screen units.
	pub extent: Extent,
	/// World rectangle the viewport may not leave.
	pub translate_extent: Extent,
}

impl ZoomBehavior {
	pub fn new(extent: Extent, scale_extent: (f64, f64)) -> Self {
		Self {
			scale_extent,
			extent,
			translate_extent: extent,
		}
	}

	/// Scale by `factor` keeping the screen point `(px, py)` fixed.
	pub fn scale_by(&self, t: ZoomTransform, factor: f64, (px, py): (f64, f64)) -> ZoomTransform {
		let k = (t.k * factor).clamp(self.scale_extent.0, self.scale_extent.1);
		let ratio = k / t.k;
		self.constrain(ZoomTransform {
			k,
			x: px - (px - t.x) * ratio,
			y: py - (py - t.y) * ratio,
		})
	}

	/// Pan by a screen-space delta.
	pub fn pan_by(&self, t: ZoomTransform, dx: f64, dy: f64) -> ZoomTransform {
		self.constrain(ZoomTransform {
			x: t.x + dx,
			y: t.y + dy,
			..t
		})
	}

	/// Pull the transform back so the viewport stays inside the translate extent.
	pub fn constrain(&self, t: ZoomTransform) -> ZoomTransform {
		let (e, te) = (self.extent, self.translate_extent);
		let dx0 = t.invert_x(e[0][0]) - te[0][0];
		let dx1 = t.invert_x(e[1][0]) - te[1][0];
		let dy0 = t.invert_y(e[0][1]) - te[0][1];
		let dy1 = t.invert_y(e[1][1]) - te[1][1];
		t.translate(settle(dx0, dx1), settle(dy0, dy1))
	}
}

fn settle(d0: f64, d1: f64) -> f64 {
	if d1 > d0 {
		(d0 + d1) / 2.0
	} else if d0.min(0.0) != 0.0 {
		d0.min(0.0)
	} else {
		d1.max(0.0)
	}
}
