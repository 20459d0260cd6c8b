use serde::Deserialize;

/// Hero node in the relationship graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Id referenced by [`GraphLink`] endpoints.
	pub id: u64,
	/// Circle diameter basis and pattern image size, in viewBox units.
	pub size: f64,
	/// Image painted into the node's pattern.
	pub image: String,
}

/// Undirected edge between two [`GraphNode`] ids.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphLink {
	/// One endpoint id.
	pub source: u64,
	/// The other endpoint id.
	pub target: u64,
}

/// Nodes and links for one graph render.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	/// Sorted by descending size when laid out.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	/// Edges between node ids.
	#[serde(default)]
	pub links: Vec<GraphLink>,
}
