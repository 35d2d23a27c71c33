//! JS-facing header API.
//!
//! Holds at most one breadcrumb binding and one primary-cta binding per page
//! (the click-back protocol cannot address more), plus the `beforeunload`
//! hook that tells the host to clear stale header UI when the page goes away.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::converters;
use crate::breadcrumbs::BreadcrumbsBinding;
use crate::platform::Platform;
use crate::primary_cta::PrimaryCtaBinding;

#[derive(Default)]
struct HeaderFacade {
    breadcrumbs: Option<BreadcrumbsBinding>,
    primary_cta: Option<PrimaryCtaBinding>,
    unload: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl HeaderFacade {
    fn notify_teardown(&self) {
        if let Some(binding) = &self.breadcrumbs {
            binding.notify_teardown();
        }
        if let Some(binding) = &self.primary_cta {
            binding.notify_teardown();
        }
    }

    fn ensure_unload_hook(&mut self) {
        if self.unload.is_some() {
            return;
        }

        let closure = Closure::wrap(Box::new(|_: web_sys::Event| {
            HEADER.with(|facade| facade.borrow().notify_teardown());
        }) as Box<dyn FnMut(web_sys::Event)>);

        match crate::global::window() {
            Ok(window) => {
                if let Err(err) = window.add_event_listener_with_callback(
                    "beforeunload",
                    closure.as_ref().unchecked_ref(),
                ) {
                    crate::adapters::logger()
                        .error(&format!("Failed to attach unload hook: {err:?}"));
                    return;
                }
                self.unload = Some(closure);
            }
            Err(err) => {
                crate::adapters::logger().error(&format!("Failed to attach unload hook: {err}"));
            }
        }
    }

    fn remove_unload_hook(&mut self) {
        if let Some(closure) = self.unload.take() {
            if let Ok(window) = crate::global::window() {
                let _ = window.remove_event_listener_with_callback(
                    "beforeunload",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

thread_local! {
    static HEADER: RefCell<HeaderFacade> = RefCell::new(HeaderFacade::default());
}

fn with_header<F, R>(f: F) -> R
where
    F: FnOnce(&mut HeaderFacade) -> R,
{
    HEADER.with(|facade| f(&mut facade.borrow_mut()))
}

/// Publishes the breadcrumb trail. `breadcrumbs` is an array of
/// `{ label, onClick? }` objects; `config` may carry `{ portalUrl }`.
#[wasm_bindgen]
pub fn set_breadcrumbs(breadcrumbs: JsValue, config: JsValue) -> Result<(), JsValue> {
    let config = converters::js_config(config)?;
    let items = converters::js_breadcrumbs(breadcrumbs)?;

    with_header(|facade| {
        facade.ensure_unload_hook();
        let mut binding = facade
            .breadcrumbs
            .take()
            .unwrap_or_else(|| BreadcrumbsBinding::new(Platform::new(), &config));
        binding.configure(&config);
        binding.set_items(items);
        facade.breadcrumbs = Some(binding);
    });

    Ok(())
}

/// Publishes the primary call-to-action. `primary_cta` is a
/// `{ label, onClick? }` object or `null`/`undefined` to clear the button.
#[wasm_bindgen]
pub fn set_primary_cta(primary_cta: JsValue, config: JsValue) -> Result<(), JsValue> {
    let config = converters::js_config(config)?;
    let value = converters::js_primary_cta(primary_cta)?;

    with_header(|facade| {
        facade.ensure_unload_hook();
        let mut binding = facade
            .primary_cta
            .take()
            .unwrap_or_else(|| PrimaryCtaBinding::new(Platform::new(), &config));
        binding.configure(&config);
        binding.set(value);
        facade.primary_cta = Some(binding);
    });

    Ok(())
}

/// Explicit counterpart of the unload path: sends the teardown clears, stops
/// listening for click-backs, and removes the unload hook.
#[wasm_bindgen]
pub fn detach_header() {
    with_header(|facade| {
        if let Some(mut binding) = facade.breadcrumbs.take() {
            binding.notify_teardown();
            binding.detach();
        }
        if let Some(mut binding) = facade.primary_cta.take() {
            binding.notify_teardown();
            binding.detach();
        }
        facade.remove_unload_hook();
    });
}
