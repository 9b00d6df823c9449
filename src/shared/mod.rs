//! Gemeinsame Typen zwischen App, UI und Renderer.

pub mod options;
pub mod render_scene;

pub use options::PlotterOptions;
pub use render_scene::RenderScene;
