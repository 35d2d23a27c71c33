//! Breadcrumb binding: publishes the embedded page's breadcrumb trail to the
//! trusted destinations and resolves click-backs against the current trail.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatch::{with_click_dispatcher, ClickHandler, SubscriptionId};
use crate::domain::header::{
    Breadcrumb, CallbackRegistry, ClickEvent, HeaderConfig, HeaderDescriptor, TrustedDestinations,
};
use crate::platform::Platform;

pub struct BreadcrumbsBinding {
    platform: Platform,
    destinations: TrustedDestinations,
    registry: Rc<RefCell<CallbackRegistry>>,
    subscription: Option<SubscriptionId>,
}

impl BreadcrumbsBinding {
    pub fn new(platform: Platform, config: &HeaderConfig) -> Self {
        Self {
            platform,
            destinations: TrustedDestinations::from_config(config),
            registry: Rc::new(RefCell::new(CallbackRegistry::new())),
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

    /// Replaces the trail wholesale: rebuilds the click-back registry,
    /// publishes the derived descriptor to the dashboard (and the portal when
    /// configured), and swaps the channel subscription.
    pub fn set_items(&mut self, items: Vec<Breadcrumb>) {
        let descriptor = HeaderDescriptor::breadcrumbs(&items);
        *self.registry.borrow_mut() = CallbackRegistry::from_breadcrumbs(&items);

        self.deliver(&descriptor, self.destinations.dashboard());
        if let Some(portal) = self.destinations.portal() {
            self.deliver(&descriptor, portal);
        }

        self.resubscribe();
    }

    /// Tells the host to clear its breadcrumb display. Sent to the dashboard
    /// only; the portal is not notified on teardown.
    pub fn notify_teardown(&self) {
        self.deliver(
            &HeaderDescriptor::cleared_breadcrumbs(),
            self.destinations.dashboard(),
        );
    }

    /// Stops listening for click-backs. The registry stays intact so a later
    /// `set_items` picks up where the binding left off.
    pub fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            with_click_dispatcher(|dispatcher| dispatcher.unsubscribe(id));
        }
    }

    /// Feeds one inbound event through the binding's registry, bypassing the
    /// dispatcher. Exercised directly by tests.
    pub fn handle_click(&self, event: &ClickEvent) {
        Self::resolve(&self.registry, event);
    }

    fn resubscribe(&mut self) {
        self.detach();

        let registry = Rc::clone(&self.registry);
        let handler: ClickHandler = Rc::new(move |event| Self::resolve(&registry, event));
        self.subscription =
            Some(with_click_dispatcher(|dispatcher| dispatcher.subscribe(handler)));
    }

    fn resolve(registry: &Rc<RefCell<CallbackRegistry>>, event: &ClickEvent) {
        let ClickEvent::Breadcrumb { id } = event else {
            return;
        };
        // Clone out of the registry before invoking: the action is free to
        // replace the trail, which rebuilds the registry.
        let action = registry.borrow().get(id).cloned();
        if let Some(action) = action {
            action();
        }
    }

    fn deliver(&self, descriptor: &HeaderDescriptor, target_origin: &str) {
        let payload = match serde_json::to_value(descriptor) {
            Ok(payload) => payload,
            Err(err) => {
                self.platform
                    .logger()
                    .error(&format!("Failed to serialize breadcrumb descriptor: {err}"));
                return;
            }
        };

        if let Err(err) = self.platform.messenger().deliver(&payload, target_origin) {
            self.platform.logger().error(&format!(
                "Failed to deliver breadcrumb descriptor to {target_origin}: {err}"
            ));
        }
    }
}

impl Drop for BreadcrumbsBinding {
    fn drop(&mut self) {
        self.detach();
    }
}
