/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod parent_messenger;

pub use console_logger::ConsoleLogger;
pub use parent_messenger::ParentMessenger;
