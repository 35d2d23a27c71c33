use serde::Serialize;

use crate::global::parent_window;
use crate::ports::MessengerPort;

/// Delivers descriptors to the embedding frame via `window.parent.postMessage`
/// with an explicit target origin. The browser drops the message when the
/// parent's origin does not match, so an allow-listed origin is enforced per
/// send rather than per listener.
#[derive(Clone, Copy)]
pub struct ParentMessenger;

impl ParentMessenger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParentMessenger {
    fn default() -> Self {
        Self::new()
    }
}

impl MessengerPort for ParentMessenger {
    fn deliver(&self, payload: &serde_json::Value, target_origin: &str) -> Result<(), String> {
        let recipient = parent_window().map_err(|e| e.to_string())?;

        // Descriptors must cross the boundary as plain objects, not JS Maps.
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        let js_value = payload
            .serialize(&serializer)
            .map_err(|e| format!("Failed to serialize descriptor: {e:?}"))?;

        recipient
            .post_message(&js_value, target_origin)
            .map_err(|e| format!("{e:?}"))?;

        Ok(())
    }
}
