//! The shared inbound click channel.
//!
//! The browser delivers every cross-window message to one global `message`
//! event stream. Bindings do not listen there directly; they subscribe to
//! this dispatcher, which owns the single window listener and fans parsed
//! click events out to whoever is currently subscribed. Subscription and
//! removal are explicit, so a binding's listening lifetime is visible and
//! testable. Off the browser there is no window; tests feed events straight
//! into `dispatch_click`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::header::ClickEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::MessageEvent;

pub type ClickHandler = Rc<dyn Fn(&ClickEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

pub struct ClickDispatcher {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, ClickHandler)>,
    #[cfg(target_arch = "wasm32")]
    channel: Option<Closure<dyn FnMut(MessageEvent)>>,
}

impl Default for ClickDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickDispatcher {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
            #[cfg(target_arch = "wasm32")]
            channel: None,
        }
    }

    /// Registers a handler for every inbound click event. The first
    /// subscriber attaches the window listener.
    pub fn subscribe(&mut self, handler: ClickHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, handler));

        #[cfg(target_arch = "wasm32")]
        self.attach_channel();

        id
    }

    /// Removes a handler. Unknown ids are a no-op, so tearing down an
    /// already-replaced subscription is harmless. The last subscriber
    /// detaches the window listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);

        #[cfg(target_arch = "wasm32")]
        {
            if self.subscribers.is_empty() {
                self.detach_channel();
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn snapshot(&self) -> Vec<ClickHandler> {
        self.subscribers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect()
    }
}

#[cfg(target_arch = "wasm32")]
impl ClickDispatcher {
    fn attach_channel(&mut self) {
        if self.channel.is_some() {
            return;
        }

        // Anything on the channel that is not a click event is unrelated
        // traffic and dropped without a sound.
        let closure = Closure::wrap(Box::new(|event: MessageEvent| {
            if let Ok(click) = serde_wasm_bindgen::from_value::<ClickEvent>(event.data()) {
                dispatch_click(&click);
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        match crate::global::window() {
            Ok(window) => {
                if let Err(err) = window
                    .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
                {
                    crate::adapters::logger()
                        .error(&format!("Failed to attach click channel: {err:?}"));
                    return;
                }
                self.channel = Some(closure);
            }
            Err(err) => {
                crate::adapters::logger().error(&format!("Failed to attach click channel: {err}"));
            }
        }
    }

    fn detach_channel(&mut self) {
        if let Some(closure) = self.channel.take() {
            if let Ok(window) = crate::global::window() {
                let _ = window.remove_event_listener_with_callback(
                    "message",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

thread_local! {
    static CLICK_DISPATCHER: RefCell<ClickDispatcher> = RefCell::new(ClickDispatcher::new());
}

pub fn with_click_dispatcher<F, R>(f: F) -> R
where
    F: FnOnce(&mut ClickDispatcher) -> R,
{
    CLICK_DISPATCHER.with(|dispatcher| f(&mut dispatcher.borrow_mut()))
}

/// Fans one event out to the current subscribers. Handlers run against a
/// snapshot taken before the first invocation: a handler that swaps its own
/// subscription mid-dispatch neither deadlocks the dispatcher nor lets the
/// replacement see the event that triggered the swap.
pub fn dispatch_click(event: &ClickEvent) {
    let handlers = CLICK_DISPATCHER.with(|dispatcher| dispatcher.borrow().snapshot());
    for handler in handlers {
        handler(event);
    }
}
