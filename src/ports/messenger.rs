/// Messenger port - fire-and-forget descriptor delivery to a trusted
/// destination.
///
/// The payload is plain structured data; the adapter owns the conversion to
/// whatever the underlying channel carries (a JS value for
/// `window.postMessage`, an in-memory record on native). Delivery is not
/// acknowledged; a returned error means the send itself could not be issued.
pub trait MessengerPort: Send + Sync {
    fn deliver(&self, payload: &serde_json::Value, target_origin: &str) -> Result<(), String>;
}
