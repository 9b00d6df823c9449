//! UI-Komponenten: Toolbar, Parameter-Panel, Status-Bar, Input-Handling.

pub mod input;
pub mod panel;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use panel::render_side_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
