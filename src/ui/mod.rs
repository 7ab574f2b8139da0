pub mod overlay;
pub mod render;

pub use overlay::MatchOverlay;
pub use render::{render, render_banner};
