/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Arc<dyn Trait>` (ref-counted, when needed)

use std::sync::Arc;

use crate::ports::{LoggerPort, MessengerPort};

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    messenger: Arc<dyn MessengerPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            messenger: crate::adapters::messenger(),
        }
    }

    /// Creates a Platform around a caller-supplied messenger. Tests hand in a
    /// recording messenger and keep a handle for assertions.
    pub fn with_messenger(messenger: Arc<dyn MessengerPort>) -> Self {
        Self {
            logger: crate::adapters::logger(),
            messenger,
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn messenger(&self) -> &dyn MessengerPort {
        self.messenger.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
