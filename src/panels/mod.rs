mod canvas_panel;
mod status_bar;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use status_bar::status_bar;
pub use toolbar::{ToolbarAction, toolbar};
