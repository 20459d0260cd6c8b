mod component;
mod layout;

pub use component::CategoryPie;
pub use layout::{PieConfig, PieSlice};
