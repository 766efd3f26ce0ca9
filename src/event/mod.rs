mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::SurfaceEvent;
pub use handlers::{EventLog, LogHandler};

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &SurfaceEvent);
}
