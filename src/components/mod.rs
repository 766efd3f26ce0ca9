mod color_swatch;
mod tool_button;

pub use color_swatch::ColorSwatchButton;
pub use tool_button::ToolButton;
