//! Core worker utilities

use crate::events::Event;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
///
/// Sends never fail loudly: once the receiving side is gone (the dashboard
/// was unmounted) an event is simply dropped.
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    /// Whether anything is still listening.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
