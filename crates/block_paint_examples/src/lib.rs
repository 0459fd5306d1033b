#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, save_pixmap_png, DEMO_HASHES};
