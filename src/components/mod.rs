//! SVG chart components and the layout code behind them.

pub mod bar_chart;
mod color;
pub mod force_graph;
pub mod pie_chart;
mod pointer;
mod scale;
pub mod series_button;
mod shape;
