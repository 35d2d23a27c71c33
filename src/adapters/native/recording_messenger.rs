use std::sync::Mutex;

use crate::ports::MessengerPort;

/// One recorded send: the payload and the origin it was addressed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub payload: serde_json::Value,
    pub target_origin: String,
}

/// In-memory messenger. Records every delivery in order so tests can assert
/// on what would have crossed the window boundary.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded deliveries, oldest first.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().expect("messenger lock").clone()
    }

    /// Deliveries addressed to the given origin, oldest first.
    pub fn deliveries_to(&self, target_origin: &str) -> Vec<Delivery> {
        self.deliveries()
            .into_iter()
            .filter(|d| d.target_origin == target_origin)
            .collect()
    }

    pub fn last_delivery_to(&self, target_origin: &str) -> Option<Delivery> {
        self.deliveries_to(target_origin).into_iter().last()
    }

    pub fn clear(&self) {
        self.deliveries.lock().expect("messenger lock").clear();
    }
}

impl MessengerPort for RecordingMessenger {
    fn deliver(&self, payload: &serde_json::Value, target_origin: &str) -> Result<(), String> {
        self.deliveries
            .lock()
            .map_err(|_| "messenger lock poisoned".to_string())?
            .push(Delivery {
                payload: payload.clone(),
                target_origin: target_origin.to_string(),
            });
        Ok(())
    }
}
