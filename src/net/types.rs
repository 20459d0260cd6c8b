use serde::Deserialize;
use serde_json::Value;

use crate::components::bar_chart::BarDatum;
use crate::components::force_graph::{GraphData, GraphLink, GraphNode};
use crate::components::pie_chart::PieSlice;

/// Hero entry as served by `/matches/heroes`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroNode {
	/// Hero id, shared by the graph links.
	pub id: u64,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Picks or bans counted for this hero.
	#[serde(default)]
	pub count: f64,
	/// Portrait URL.
	#[serde(default)]
	pub image: String,
	/// Display size scaled from `count` on the server.
	#[serde(default)]
	pub size: f64,
}

impl HeroNode {
	/// Node for the relationship graph.
	pub fn graph_node(&self) -> GraphNode {
		GraphNode {
			id: self.id,
			size: self.size,
			image: self.image.clone(),
		}
	}

	/// Slice for the donut.
	pub fn pie_slice(&self) -> PieSlice {
		PieSlice {
			name: self.name.clone(),
			count: self.count,
			image: self.image.clone(),
			size: self.size,
		}
	}

	/// Entry for the ranked bars.
	pub fn bar_datum(&self) -> BarDatum {
		BarDatum {
			id: self.id,
			count: self.count,
			image: self.image.clone(),
		}
	}
}

/// Pick and ban statistics for one league, team or player.
///
/// Player stats only carry picks.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HeroStats {
	/// Picked heroes.
	#[serde(default)]
	pub nodes_picks: Vec<HeroNode>,
	/// Heroes picked together.
	#[serde(default)]
	pub links_picks: Vec<GraphLink>,
	/// Banned heroes.
	#[serde(default)]
	pub nodes_bans: Vec<HeroNode>,
	/// Heroes banned together.
	#[serde(default)]
	pub links_bans: Vec<GraphLink>,
}

/// Graph, pie and bar inputs for one side of the stats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSet {
	/// Relationship graph input.
	pub graph: GraphData,
	/// Donut input.
	pub pie: Vec<PieSlice>,
	/// Ranked bar input.
	pub bars: Vec<BarDatum>,
}

impl ChartSet {
	fn from_nodes(nodes: &[HeroNode], links: &[GraphLink]) -> Self {
		Self {
			graph: GraphData {
				nodes: nodes.iter().map(HeroNode::graph_node).collect(),
				links: links.to_vec(),
			},
			pie: nodes.iter().map(HeroNode::pie_slice).collect(),
			bars: nodes.iter().map(HeroNode::bar_datum).collect(),
		}
	}

	/// True when there are no heroes to chart.
	pub fn is_empty(&self) -> bool {
		self.graph.nodes.is_empty()
	}
}

impl HeroStats {
	/// Decode a `/matches/heroes` body.
	pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
		serde_json::from_value(value)
	}

	/// Chart inputs for the picks.
	pub fn picks(&self) -> ChartSet {
		ChartSet::from_nodes(&self.nodes_picks, &self.links_picks)
	}

	/// Chart inputs for the bans.
	pub fn bans(&self) -> ChartSet {
		ChartSet::from_nodes(&self.nodes_bans, &self.links_bans)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn decodes_team_payload() {
		let body = json!({
			"nodes_picks": [
				{"id": 1, "name": "Anti-Mage", "count": 4, "image": "/am.png", "size": 55.0},
				{"id": 2, "name": "Axe", "count": 2, "image": "/axe.png", "size": 30.0}
			],
			"links_picks": [{"source": 1, "target": 2}],
			"nodes_bans": [],
			"links_bans": []
		});
		let stats = HeroStats::from_value(body).unwrap();
		let picks = stats.picks();
		assert_eq!(picks.graph.nodes[0].image, "/am.png");
		assert_eq!(picks.graph.links, vec![GraphLink { source: 1, target: 2 }]);
		assert_eq!(picks.pie[1].name, "Axe");
		assert_eq!(picks.bars[0].count, 4.0);
		assert!(stats.bans().is_empty());
	}

	#[test]
	fn player_payload_has_only_picks() {
		let body = json!({"nodes_picks": [{"id": 9, "name": "Lina", "count": 1, "image": "/l.png", "size": 10}]});
		let stats = HeroStats::from_value(body).unwrap();
		assert_eq!(stats.picks().graph.nodes.len(), 1);
		assert!(stats.links_picks.is_empty());
		assert!(stats.nodes_bans.is_empty());
	}
}
