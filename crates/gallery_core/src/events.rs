//! Gallery change notifications
//!
//! The display layer observes the registry through an explicit event stream
//! instead of poking at its list directly.

use crate::registry::ImageEntry;
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;

/// A change to the gallery's display list
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    /// The display list was rebuilt from the persisted list
    Reloaded { count: usize },
    /// An image was registered and prepended
    Added(ImageEntry),
    /// An image was removed
    Removed { name: String },
}

/// Fan-out channel for gallery events
pub struct EventBus {
    senders: Mutex<Vec<Sender<GalleryEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Create a new subscription
    pub fn subscribe(&self) -> Receiver<GalleryEvent> {
        let (tx, rx) = unbounded();
        self.senders.lock().push(tx);
        rx
    }

    /// Deliver an event to all live subscribers, dropping closed ones
    pub fn emit(&self, event: GalleryEvent) {
        let mut senders = self.senders.lock();
        senders.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let rx = bus.subscribe();

        bus.emit(GalleryEvent::Removed {
            name: "1000.jpg".to_string(),
        });

        assert_eq!(
            rx.try_recv().unwrap(),
            GalleryEvent::Removed {
                name: "1000.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let bus = EventBus::new();
        let rx = bus.subscribe();
        drop(rx);

        // Must not error or grow the sender list
        bus.emit(GalleryEvent::Reloaded { count: 0 });
        assert!(bus.senders.lock().is_empty());
    }
}
