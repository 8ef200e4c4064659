//! Events emitted by the roulette

use std::sync::Arc;

/// Outcome of a roulette request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouletteEvent {
    /// A mount was chosen from a group
    MountSelected { group: String, mount_id: u32 },
    /// The group exists but no mount survived filtering
    NoMountAvailable { group: String },
    /// A slot or command referenced a group that does not exist
    GroupNotFound { group: String },
    /// User-facing error message (printed to chat unless suppressed)
    Error(String),
}

/// Callback type for roulette events
pub type EventCallback = Box<dyn Fn(&RouletteEvent) + Send + Sync>;

/// Shared form of a registered listener
pub type Listener = Arc<dyn Fn(&RouletteEvent) + Send + Sync>;

/// Event handler that can have multiple listeners
pub struct EventHandler {
    callbacks: Vec<Listener>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Add a listener
    pub fn subscribe(&mut self, callback: EventCallback) {
        self.callbacks.push(Arc::from(callback));
    }

    /// Current listeners, so they can be called without holding a lock on
    /// the handler
    pub fn listeners(&self) -> Vec<Listener> {
        self.callbacks.clone()
    }

    /// Emit an event to all listeners
    pub fn emit(&self, event: &RouletteEvent) {
        for callback in &self.callbacks {
            callback(event);
        }
    }

    /// Check if there are any listeners
    pub fn has_listeners(&self) -> bool {
        !self.callbacks.is_empty()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
