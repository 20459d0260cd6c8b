mod component;
mod render;
mod simulation;
mod state;
mod types;

pub use component::RelationshipGraph;
pub use simulation::GraphConfig;
pub use types::{GraphData, GraphLink, GraphNode};
