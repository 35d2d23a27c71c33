/// Adapters module - platform-specific implementations of ports.

use std::sync::Arc;

use crate::ports::MessengerPort;

pub mod global_logger;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;

pub use global_logger::logger;

/// Default messenger for the current target: the parent window on WASM, an
/// in-memory recorder on native (test builds).
pub fn messenger() -> Arc<dyn MessengerPort> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(wasm::ParentMessenger::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(native::RecordingMessenger::new())
    }
}
