use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, SurfaceEvent};

/// Records emitted events into a shared buffer.
///
/// Clones share the same buffer, so one clone can be subscribed to a bus
/// while another is kept around for reading.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<VecDeque<SurfaceEvent>>>,
    /// Oldest events are dropped past this many. `None` keeps everything.
    capacity: Option<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: Some(capacity),
        }
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().iter().cloned().collect()
    }

    pub fn last(&self) -> Option<SurfaceEvent> {
        self.events.lock().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&SurfaceEvent) -> bool) -> usize {
        self.events.lock().iter().filter(|event| predicate(event)).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &SurfaceEvent) {
        let mut events = self.events.lock();
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while events.len() >= capacity {
                events.pop_front();
            }
        }
        events.push_back(event.clone());
    }
}

/// Forwards surface events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &SurfaceEvent) {
        match event {
            SurfaceEvent::SegmentRendered(segment) => log::trace!(
                "Segment {:?} -> {:?} width {}",
                segment.from(),
                segment.to(),
                segment.width()
            ),
            other => log::trace!("Surface event: {}", other.name()),
        }
    }
}
