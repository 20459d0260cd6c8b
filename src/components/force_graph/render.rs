use super::state::{ForceGraphState, NodeStyle};

/// Image-fill pattern for one node, referenced as `url(#pattern-{id})`.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternFrame {
	pub id: String,
	pub image: String,
	pub size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeFrame {
	pub id: u64,
	pub dom_id: String,
	pub fill: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub selected: bool,
	pub style: Option<NodeStyle>,
}

impl NodeFrame {
	pub fn transform(&self) -> String {
		format!("translate({},{})", self.x, self.y)
	}

	pub fn circle_style(&self) -> String {
		self.style
			.map(|s| format!("stroke: {}; opacity: {};", s.stroke, s.opacity))
			.unwrap_or_default()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkFrame {
	pub index: usize,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub highlighted: bool,
}

/// Everything the SVG view needs for one tick, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphFrame {
	pub links: Vec<LinkFrame>,
	pub nodes: Vec<NodeFrame>,
}

pub fn pattern_id(id: u64) -> String {
	format!("pattern-{id}")
}

pub fn node_dom_id(id: u64) -> String {
	format!("node-{id}")
}

pub fn patterns(state: &ForceGraphState) -> Vec<PatternFrame> {
	state
		.nodes()
		.iter()
		.map(|n| PatternFrame {
			id: pattern_id(n.id),
			image: n.image.clone(),
			size: n.size,
		})
		.collect()
}

/// Snapshot link endpoints and node transforms from the current positions.
pub fn frame(state: &ForceGraphState) -> GraphFrame {
	let links = state
		.link_order()
		.iter()
		.filter_map(|&index| {
			let link = state.links().get(index)?;
			let (x1, y1) = state.position(link.source)?;
			let (x2, y2) = state.position(link.target)?;
			Some(LinkFrame {
				index,
				x1,
				y1,
				x2,
				y2,
				highlighted: state.is_link_highlighted(index),
			})
		})
		.collect();

	let nodes = state
		.node_order()
		.iter()
		.filter_map(|&id| {
			let node = state.node(id)?;
			let (x, y) = state.position(id)?;
			Some(NodeFrame {
				id,
				dom_id: node_dom_id(id),
				fill: format!("url(#{})", pattern_id(id)),
				x,
				y,
				radius: node.radius(),
				selected: state.highlight.selected == Some(id),
				style: state.style(id),
			})
		})
		.collect();

	GraphFrame { links, nodes }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::simulation::GraphConfig;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn state() -> ForceGraphState {
		let mut nodes = vec![
			GraphNode {
				id: 7,
				size: 44.0,
				image: "a.png".into(),
			},
			GraphNode {
				id: 9,
				size: 22.0,
				image: "b.png".into(),
			},
		];
		let links = vec![GraphLink { source: 7, target: 9 }];
		ForceGraphState::new(&mut nodes, &links, GraphConfig::default())
	}

	#[test]
	fn patterns_are_keyed_by_node_id() {
		let p = patterns(&state());
		assert_eq!(p[0].id, "pattern-7");
		assert_eq!(p[0].size, 44.0);
		assert_eq!(p[1].image, "b.png");
	}

	#[test]
	fn link_endpoints_follow_node_positions() {
		let mut s = state();
		s.tick();
		let f = frame(&s);
		let (n7, n9) = (&f.nodes[0], &f.nodes[1]);
		assert_eq!((f.links[0].x1, f.links[0].y1), (n7.x, n7.y));
		assert_eq!((f.links[0].x2, f.links[0].y2), (n9.x, n9.y));
		assert_eq!(n7.dom_id, "node-7");
		assert_eq!(n7.fill, "url(#pattern-7)");
		assert!((n7.radius - 20.0).abs() < 1e-9);
		assert_eq!(n7.transform(), format!("translate({},{})", n7.x, n7.y));
	}

	#[test]
	fn highlight_shows_up_in_frame() {
		let mut s = state();
		assert_eq!(frame(&s).nodes[0].circle_style(), "");
		s.click(7);
		let f = frame(&s);
		assert!(f.links[0].highlighted);
		let n7 = f.nodes.iter().find(|n| n.id == 7).unwrap();
		assert!(n7.selected);
		assert_eq!(n7.circle_style(), "stroke: red; opacity: 1;");
	}
}
