/// Native adapters - in-process implementations used off the browser,
/// primarily by the test suite.

pub mod console_logger;
pub mod recording_messenger;

pub use console_logger::ConsoleLogger;
pub use recording_messenger::{Delivery, RecordingMessenger};
