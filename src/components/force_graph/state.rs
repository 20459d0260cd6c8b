use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use log::debug;

use super::simulation::{GraphConfig, NodeInfo, Simulation};
use super::types::{GraphLink, GraphNode};

pub const RESET_STROKE: &str = "#b6b6b6";
pub const RESET_OPACITY: &str = "0.6";
pub const NEIGHBOR_STROKE: &str = "red";
pub const NEIGHBOR_OPACITY: &str = "1";

/// Alpha target used to reheat the layout while a node is dragged.
const DRAG_ALPHA_TARGET: f64 = 0.3;

/// Inline circle style set by click highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStyle {
	pub stroke: &'static str,
	pub opacity: &'static str,
}

impl NodeStyle {
	pub const RESET: Self = Self {
		stroke: RESET_STROKE,
		opacity: RESET_OPACITY,
	};
	pub const NEIGHBOR: Self = Self {
		stroke: NEIGHBOR_STROKE,
		opacity: NEIGHBOR_OPACITY,
	};
}

#[derive(Clone, Debug)]
pub struct NodeEntry {
	pub id: u64,
	pub size: f64,
	pub image: String,
	pub idx: DefaultNodeIdx,
}

impl NodeEntry {
	pub fn radius(&self) -> f64 {
		self.size / 2.2
	}
}

#[derive(Clone, Debug)]
pub struct LinkEntry {
	pub source: u64,
	pub target: u64,
}

impl LinkEntry {
	pub fn touches(&self, id: u64) -> bool {
		self.source == id || self.target == id
	}
}

/// Pointer interaction: idle, or holding one node pinned under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
	#[default]
	Idle,
	Dragging {
		node: u64,
		moved: bool,
	},
}

#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	/// Node most recently clicked.
	pub selected: Option<u64>,
	/// Indices into the link list.
	pub links: HashSet<usize>,
	/// Per-node inline style; empty until the first click.
	pub styles: HashMap<u64, NodeStyle>,
}

pub struct ForceGraphState {
	pub simulation: Simulation,
	pub config: GraphConfig,
	pub drag: DragState,
	pub highlight: HighlightState,
	pub hovered: Option<u64>,
	nodes: Vec<NodeEntry>,
	links: Vec<LinkEntry>,
	id_to_pos: HashMap<u64, usize>,
	/// Node ids in paint order, last on top.
	node_order: Vec<u64>,
	/// Link indices in paint order, last on top.
	link_order: Vec<usize>,
	suppress_click: bool,
}

impl ForceGraphState {
	/// Build the layout. `nodes` is sorted in place by descending `size`.
	///
	/// Links naming an unknown node id are dropped.
	pub fn new(nodes: &mut [GraphNode], links: &[GraphLink], config: GraphConfig) -> Self {
		nodes.sort_by(|a, b| b.size.total_cmp(&a.size));

		let mut simulation = Simulation::new(&config);
		let mut entries = Vec::with_capacity(nodes.len());
		let mut id_to_pos = HashMap::new();

		for (i, node) in nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / nodes.len() as f64;
			let (x, y) = (
				(config.width / 2.0 + 100.0 * angle.cos()) as f32,
				(config.height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			let idx = simulation.add_node(
				NodeInfo {
					id: node.id,
					size: node.size,
				},
				x,
				y,
			);
			id_to_pos.insert(node.id, entries.len());
			entries.push(NodeEntry {
				id: node.id,
				size: node.size,
				image: node.image.clone(),
				idx,
			});
		}

		let mut kept = Vec::with_capacity(links.len());
		for link in links {
			match (id_to_pos.get(&link.source), id_to_pos.get(&link.target)) {
				(Some(&s), Some(&t)) => {
					simulation.add_link(entries[s].idx, entries[t].idx);
					kept.push(LinkEntry {
						source: link.source,
						target: link.target,
					});
				}
				_ => debug!("dropping link {} -> {}: unknown node", link.source, link.target),
			}
		}

		Self {
			node_order: entries.iter().map(|n| n.id).collect(),
			link_order: (0..kept.len()).collect(),
			simulation,
			config,
			drag: DragState::Idle,
			highlight: HighlightState::default(),
			hovered: None,
			nodes: entries,
			links: kept,
			id_to_pos,
			suppress_click: false,
		}
	}

	pub fn nodes(&self) -> &[NodeEntry] {
		&self.nodes
	}

	pub fn links(&self) -> &[LinkEntry] {
		&self.links
	}

	pub fn node(&self, id: u64) -> Option<&NodeEntry> {
		self.id_to_pos.get(&id).map(|&i| &self.nodes[i])
	}

	pub fn node_order(&self) -> &[u64] {
		&self.node_order
	}

	pub fn link_order(&self) -> &[usize] {
		&self.link_order
	}

	pub fn position(&self, id: u64) -> Option<(f64, f64)> {
		self.simulation.position(self.node(id)?.idx)
	}

	/// Topmost node whose circle contains the viewBox point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<u64> {
		self.node_order.iter().rev().copied().find(|&id| {
			let (Some(node), Some((nx, ny))) = (self.node(id), self.position(id)) else {
				return false;
			};
			let (dx, dy) = (nx - x, ny - y);
			(dx * dx + dy * dy).sqrt() <= node.radius()
		})
	}

	/// Move a node to the top of the paint order.
	pub fn raise_node(&mut self, id: u64) {
		if let Some(pos) = self.node_order.iter().position(|&n| n == id) {
			let id = self.node_order.remove(pos);
			self.node_order.push(id);
		}
	}

	fn raise_link(&mut self, index: usize) {
		if let Some(pos) = self.link_order.iter().position(|&l| l == index) {
			self.link_order.remove(pos);
			self.link_order.push(index);
		}
	}

	/// Pointer moved without a drag in progress: raise newly hovered nodes.
	pub fn set_hover(&mut self, node: Option<u64>) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		if let Some(id) = node {
			self.raise_node(id);
		}
	}

	pub fn drag_start(&mut self, id: u64) {
		let Some(idx) = self.node(id).map(|n| n.idx) else {
			return;
		};
		self.suppress_click = false;
		if self.drag == DragState::Idle {
			self.simulation.set_alpha_target(DRAG_ALPHA_TARGET);
			self.simulation.restart();
		}
		if let Some((x, y)) = self.simulation.position(idx) {
			self.simulation.pin(idx, x as f32, y as f32);
		}
		self.drag = DragState::Dragging {
			node: id,
			moved: false,
		};
	}

	pub fn drag_move(&mut self, x: f64, y: f64) {
		let DragState::Dragging { node, .. } = self.drag else {
			return;
		};
		if let Some(idx) = self.node(node).map(|n| n.idx) {
			self.simulation.pin(idx, x as f32, y as f32);
		}
		self.drag = DragState::Dragging { node, moved: true };
	}

	/// Release the dragged node on pointer up. A drag that moved the node
	/// swallows the click that follows it.
	pub fn drag_end(&mut self) {
		self.suppress_click = self.release_drag();
	}

	/// Release the dragged node when the pointer leaves the graph. No click
	/// follows, so nothing is swallowed.
	pub fn drag_cancel(&mut self) {
		self.release_drag();
		self.suppress_click = false;
	}

	/// Returns whether the released node had moved.
	fn release_drag(&mut self) -> bool {
		let DragState::Dragging { node, moved } = self.drag else {
			return false;
		};
		self.drag = DragState::Idle;
		self.simulation.set_alpha_target(0.0);
		if let Some(idx) = self.node(node).map(|n| n.idx) {
			self.simulation.unpin(idx);
		}
		moved
	}

	/// Click on a node. Ignored when it concludes a drag that moved the node.
	pub fn click(&mut self, id: u64) {
		if std::mem::take(&mut self.suppress_click) {
			return;
		}
		self.highlight_node(id);
	}

	/// Click at a viewBox point. A miss still consumes a pending drag
	/// suppression.
	pub fn click_at(&mut self, x: f64, y: f64) {
		match self.node_at_position(x, y) {
			Some(id) => self.click(id),
			None => self.suppress_click = false,
		}
	}

	/// Reset all highlighting, then mark `id` and every link touching it
	/// together with both of that link's endpoints.
	pub fn highlight_node(&mut self, id: u64) {
		if self.node(id).is_none() {
			return;
		}
		self.highlight.links.clear();
		self.highlight.styles = self
			.nodes
			.iter()
			.map(|n| (n.id, NodeStyle::RESET))
			.collect();
		self.highlight.selected = Some(id);

		let touching: Vec<usize> = self
			.links
			.iter()
			.enumerate()
			.filter(|(_, l)| l.touches(id))
			.map(|(i, _)| i)
			.collect();
		for i in touching {
			let LinkEntry { source, target } = self.links[i].clone();
			self.highlight.links.insert(i);
			self.raise_link(i);
			self.raise_node(source);
			self.raise_node(target);
			self.highlight.styles.insert(source, NodeStyle::NEIGHBOR);
			self.highlight.styles.insert(target, NodeStyle::NEIGHBOR);
		}
	}

	pub fn is_link_highlighted(&self, index: usize) -> bool {
		self.highlight.links.contains(&index)
	}

	pub fn style(&self, id: u64) -> Option<NodeStyle> {
		self.highlight.styles.get(&id).copied()
	}

	pub fn tick(&mut self) -> bool {
		let dt = self.config.dt;
		self.simulation.tick(dt)
	}
}
