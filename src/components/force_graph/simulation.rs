use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

/// Layout constants for the relationship graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	/// ViewBox width.
	pub width: f64,
	/// ViewBox height.
	pub height: f64,
	/// Many-body repulsion, applied as the engine's charge force.
	pub charge: f32,
	/// Link attraction.
	pub spring: f32,
	/// Pull toward the centre axes per tick, scaled by alpha.
	pub position_strength: f32,
	/// Time step fed to the engine per animation frame.
	pub dt: f32,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			width: 900.0,
			height: 800.0,
			charge: 550.0,
			spring: 0.05,
			position_strength: 0.1,
			dt: 0.016,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: u64,
	pub size: f64,
}

/// Force layout with an alpha cooling schedule on top of [`ForceGraph`].
pub struct Simulation {
	pub graph: ForceGraph<NodeInfo, ()>,
	center: (f32, f32),
	position_strength: f32,
	alpha: f64,
	alpha_target: f64,
	alpha_min: f64,
	alpha_decay: f64,
	running: bool,
}

impl Simulation {
	pub fn new(config: &GraphConfig) -> Self {
		let alpha_min: f64 = 0.001;
		Self {
			graph: ForceGraph::new(SimulationParameters {
				force_charge: config.charge,
				force_spring: config.spring,
				force_max: 100.0,
				node_speed: 3000.0,
				damping_factor: 0.9,
			}),
			center: ((config.width / 2.0) as f32, (config.height / 2.0) as f32),
			position_strength: config.position_strength,
			alpha: 1.0,
			alpha_target: 0.0,
			alpha_min,
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			running: true,
		}
	}

	pub fn add_node(&mut self, info: NodeInfo, x: f32, y: f32) -> DefaultNodeIdx {
		let mass = 1.0 + (info.size / 50.0) as f32;
		self.graph.add_node(NodeData {
			x,
			y,
			mass,
			is_anchor: false,
			user_data: info,
		})
	}

	pub fn add_link(&mut self, source: DefaultNodeIdx, target: DefaultNodeIdx) {
		self.graph.add_edge(source, target, EdgeData::default());
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	pub fn restart(&mut self) {
		self.running = true;
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Advance one step. Returns false once the layout has cooled and stopped.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.is_running() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
		self.graph.update(dt * self.alpha as f32);
		self.apply_position_forces();
		self.apply_center_force();
		if self.alpha < self.alpha_min {
			debug!("simulation settled at alpha {:.4} (target {})", self.alpha(), self.alpha_target());
			self.running = false;
		}
		true
	}

	fn apply_position_forces(&mut self) {
		let (cx, cy) = self.center;
		let k = self.position_strength * self.alpha as f32;
		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			node.data.x += (cx - node.data.x) * k;
			node.data.y += (cy - node.data.y) * k;
		});
	}

	/// Translate free nodes so their mean sits on the viewport centre.
	fn apply_center_force(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0_f32, 0.0_f32, 0_u32);
		self.graph.visit_nodes(|node| {
			if !node.data.is_anchor {
				sx += node.x();
				sy += node.y();
				n += 1;
			}
		});
		if n == 0 {
			return;
		}
		let (dx, dy) = (self.center.0 - sx / n as f32, self.center.1 - sy / n as f32);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	pub fn pin(&mut self, idx: DefaultNodeIdx, x: f32, y: f32) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
			}
		});
	}

	pub fn unpin(&mut self, idx: DefaultNodeIdx) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = false;
			}
		});
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_node_sim() -> (Simulation, DefaultNodeIdx, DefaultNodeIdx) {
		let mut sim = Simulation::new(&GraphConfig::default());
		let a = sim.add_node(NodeInfo { id: 1, size: 40.0 }, 400.0, 400.0);
		let b = sim.add_node(NodeInfo { id: 2, size: 40.0 }, 500.0, 400.0);
		sim.add_link(a, b);
		(sim, a, b)
	}

	#[test]
	fn cools_down_and_stops() {
		let (mut sim, _, _) = two_node_sim();
		let mut ticks = 0;
		while sim.tick(0.016) {
			ticks += 1;
			assert!(ticks < 1000, "simulation never cooled");
		}
		assert!(!sim.is_running());
		assert!(sim.alpha() < 0.001);
		assert!((290..=310).contains(&ticks));
	}

	#[test]
	fn reheating_keeps_it_running() {
		let (mut sim, _, _) = two_node_sim();
		while sim.tick(0.016) {}
		sim.set_alpha_target(0.3);
		sim.restart();
		for _ in 0..500 {
			assert!(sim.tick(0.016));
		}
		assert!((sim.alpha() - 0.3).abs() < 0.01);
	}

	#[test]
	fn pinned_node_stays_put() {
		let (mut sim, a, _) = two_node_sim();
		sim.pin(a, 10.0, 20.0);
		for _ in 0..20 {
			sim.tick(0.016);
		}
		assert_eq!(sim.position(a), Some((10.0, 20.0)));
		sim.unpin(a);
		sim.tick(0.016);
		assert_ne!(sim.position(a), Some((10.0, 20.0)));
	}

	#[test]
	fn free_nodes_are_centred() {
		let (mut sim, a, b) = two_node_sim();
		sim.tick(0.016);
		let (ax, ay) = sim.position(a).unwrap();
		let (bx, by) = sim.position(b).unwrap();
		assert!(((ax + bx) / 2.0 - 450.0).abs() < 1e-3);
		assert!(((ay + by) / 2.0 - 400.0).abs() < 1e-3);
	}
}
