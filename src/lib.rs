#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;

pub use app::PaintApp;
pub use brush::{BrushState, Tool};
pub use canvas::Canvas;
pub use config::PaintConfig;
pub use error::{PaintError, PaintResult};
pub use event::{EventBus, EventHandler, EventLog, SurfaceEvent};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use state::StrokeState;
pub use stroke::Segment;
pub use surface::DrawingSurface;
