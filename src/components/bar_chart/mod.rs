mod component;
mod layout;
mod zoom;

pub use component::RankedBar;
pub use layout::{BarConfig, BarDatum};
