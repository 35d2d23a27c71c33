//! Primary-action binding: publishes the single optional call-to-action and
//! resolves its click-back.
//!
//! The click-back id is fixed, so at most one primary-action binding should
//! be live per page; the wasm facade enforces that structurally.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatch::{with_click_dispatcher, ClickHandler, SubscriptionId};
use crate::domain::header::{
    Action, ClickEvent, HeaderConfig, HeaderDescriptor, PrimaryCta, TrustedDestinations,
};
use crate::platform::Platform;

pub struct PrimaryCtaBinding {
    platform: Platform,
    destinations: TrustedDestinations,
    current: Rc<RefCell<Option<Action>>>,
    subscription: Option<SubscriptionId>,
}

impl PrimaryCtaBinding {
    pub fn new(platform: Platform, config: &HeaderConfig) -> Self {
        Self {
            platform,
            destinations: TrustedDestinations::from_config(config),
            current: Rc::new(RefCell::new(None)),
            subscription: None,
        }
    }

    /// Re-reads the destination set from configuration. Takes effect from the
    /// next publish.
    pub fn configure(&mut self, config: &HeaderConfig) {
        self.destinations = TrustedDestinations::from_config(config);
    }

    pub fn destinations(&self) -> &TrustedDestinations {
        &self.destinations
    }

    /// Replaces the action value, publishes the derived descriptor to the
    /// dashboard (and the portal when configured), and swaps the channel
    /// subscription. `None` clears the host's button.
    pub fn set(&mut self, value: Option<PrimaryCta>) {
        let descriptor = HeaderDescriptor::primary_cta(value.as_ref());
        *self.current.borrow_mut() = value.and_then(|cta| cta.on_activate);

        self.publish(&descriptor);
        self.resubscribe();
    }

    /// Tells the host to clear the button. Unlike the breadcrumb binding,
    /// teardown notifies the portal as well.
    pub fn notify_teardown(&self) {
        self.publish(&HeaderDescriptor::cleared_primary_cta());
    }

    /// Stops listening for click-backs.
    pub fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            with_click_dispatcher(|dispatcher| dispatcher.unsubscribe(id));
        }
    }

    /// Feeds one inbound event through the binding, bypassing the dispatcher.
    /// Exercised directly by tests.
    pub fn handle_click(&self, event: &ClickEvent) {
        Self::resolve(&self.current, event);
    }

    fn resubscribe(&mut self) {
        self.detach();

        let current = Rc::clone(&self.current);
        let handler: ClickHandler = Rc::new(move |event| Self::resolve(&current, event));
        self.subscription =
            Some(with_click_dispatcher(|dispatcher| dispatcher.subscribe(handler)));
    }

    // Only one action can ever be registered, so the id is not checked beyond
    // the wire shape.
    fn resolve(current: &Rc<RefCell<Option<Action>>>, event: &ClickEvent) {
        let ClickEvent::PrimaryCta { id: _ } = event else {
            return;
        };
        let action = current.borrow().clone();
        if let Some(action) = action {
            action();
        }
    }

    fn publish(&self, descriptor: &HeaderDescriptor) {
        self.deliver(descriptor, self.destinations.dashboard());
        if let Some(portal) = self.destinations.portal() {
            self.deliver(descriptor, portal);
        }
    }

    fn deliver(&self, descriptor: &HeaderDescriptor, target_origin: &str) {
        let payload = match serde_json::to_value(descriptor) {
            Ok(payload) => payload,
            Err(err) => {
                self.platform.logger().error(&format!(
                    "Failed to serialize primary-cta descriptor: {err}"
                ));
                return;
            }
        };

        if let Err(err) = self.platform.messenger().deliver(&payload, target_origin) {
            self.platform.logger().error(&format!(
                "Failed to deliver primary-cta descriptor to {target_origin}: {err}"
            ));
        }
    }
}

impl Drop for PrimaryCtaBinding {
    fn drop(&mut self) {
        self.detach();
    }
}
