//! Rendering: the caller-owned output surface and the orchestration that
//! paints one shape per transaction onto it.
pub mod renderer;
pub mod surface;

pub use renderer::{render_block, RenderConfig, RenderReport, StyleRenderer};
pub use surface::Pixmap;
