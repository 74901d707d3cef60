use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::WindowId;

/// Broadcast events emitted by the shell as state changes land.
///
/// Focus itself has no event: consumers re-derive "focused" by comparing
/// z-indices, so a `WindowRaised` notification only marks that stacking
/// changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    WindowRaised(WindowId),
    WindowMinimized(WindowId),
    WindowRestored(WindowId),
    WindowMaximized { id: WindowId, maximized: bool },
    SettingsChanged,
    IconsChanged,
    OnboardingComplete { language: String },
    Notification(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::SettingsChanged);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::SettingsChanged));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::Shutdown));
        assert!(matches!(e2, Event::Shutdown));
    }

    #[tokio::test]
    async fn window_lifecycle_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let id = WindowId(1);

        bus.publish(Event::WindowOpened(id));
        bus.publish(Event::WindowMinimized(id));
        bus.publish(Event::WindowRestored(id));
        bus.publish(Event::WindowClosed(id));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::WindowOpened(i) if i == WindowId(1)));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, Event::WindowMinimized(i) if i == WindowId(1)));

        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, Event::WindowRestored(i) if i == WindowId(1)));

        let e4 = rx.recv().await.unwrap();
        assert!(matches!(e4, Event::WindowClosed(i) if i == WindowId(1)));
    }

    #[tokio::test]
    async fn maximize_event_carries_toggle_state() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::WindowMaximized {
            id: WindowId(3),
            maximized: true,
        });

        let event = rx.recv().await.unwrap();
        assert!(
            matches!(event, Event::WindowMaximized { id, maximized } if id == WindowId(3) && maximized)
        );
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::Shutdown);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(Event::IconsChanged);
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }

    #[test]
    fn event_serialization_roundtrip() {
        let event = Event::OnboardingComplete {
            language: "en".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, Event::OnboardingComplete { ref language } if language == "en"));
    }
}
