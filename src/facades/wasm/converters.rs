use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::header::{Action, Breadcrumb, HeaderConfig, PrimaryCta};
use crate::errors::HeaderError;

pub fn js_config(value: JsValue) -> Result<HeaderConfig, HeaderError> {
    if value.is_undefined() || value.is_null() {
        return Ok(HeaderConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| HeaderError::invalid_input(format!("Invalid header config: {e}")))
}

pub fn js_breadcrumbs(value: JsValue) -> Result<Vec<Breadcrumb>, HeaderError> {
    let array: Array = value
        .dyn_into()
        .map_err(|_| HeaderError::invalid_input("Breadcrumbs must be an array"))?;

    let mut items = Vec::with_capacity(array.length() as usize);
    for entry in array.iter() {
        items.push(js_breadcrumb(entry)?);
    }
    Ok(items)
}

pub fn js_primary_cta(value: JsValue) -> Result<Option<PrimaryCta>, HeaderError> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let Breadcrumb { label, on_activate } = js_breadcrumb(value)?;
    Ok(Some(PrimaryCta { label, on_activate }))
}

fn js_breadcrumb(entry: JsValue) -> Result<Breadcrumb, HeaderError> {
    let label = Reflect::get(&entry, &JsValue::from_str("label"))
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| HeaderError::invalid_input("Breadcrumb label must be a string"))?;

    let on_activate = Reflect::get(&entry, &JsValue::from_str("onClick"))
        .ok()
        .and_then(js_action);

    Ok(Breadcrumb { label, on_activate })
}

/// Wraps a JS function as a locally held action. A throwing callback is
/// reported on the console, never propagated into the dispatch path.
fn js_action(value: JsValue) -> Option<Action> {
    let func: Function = value.dyn_into().ok()?;
    Some(Rc::new(move || {
        if let Err(err) = func.call0(&JsValue::NULL) {
            crate::adapters::logger().error(&format!("Header callback failed: {err:?}"));
        }
    }))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_config_defaults_when_absent() {
        assert_eq!(
            js_config(JsValue::UNDEFINED).unwrap(),
            HeaderConfig::default()
        );
        assert_eq!(js_config(JsValue::NULL).unwrap(), HeaderConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_js_config_reads_portal_url() {
        let config = js_sys::Object::new();
        Reflect::set(
            &config,
            &JsValue::from_str("portalUrl"),
            &JsValue::from_str("portal.example.com"),
        )
        .unwrap();

        let config = js_config(config.into()).unwrap();
        assert_eq!(config.portal_url.as_deref(), Some("portal.example.com"));
    }

    #[wasm_bindgen_test]
    fn test_js_breadcrumbs_requires_array() {
        assert!(js_breadcrumbs(JsValue::from_str("not an array")).is_err());
    }

    #[wasm_bindgen_test]
    fn test_js_breadcrumbs_extracts_labels_and_actions() {
        let with_action = js_sys::Object::new();
        Reflect::set(&with_action, &JsValue::from_str("label"), &"Home".into()).unwrap();
        Reflect::set(
            &with_action,
            &JsValue::from_str("onClick"),
            Closure::wrap(Box::new(|| {}) as Box<dyn FnMut()>)
                .into_js_value()
                .as_ref(),
        )
        .unwrap();

        let without_action = js_sys::Object::new();
        Reflect::set(&without_action, &JsValue::from_str("label"), &"Docs".into()).unwrap();

        let array = Array::new();
        array.push(&with_action);
        array.push(&without_action);

        let items = js_breadcrumbs(array.into()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Home");
        assert!(items[0].on_activate.is_some());
        assert_eq!(items[1].label, "Docs");
        assert!(items[1].on_activate.is_none());
    }

    #[wasm_bindgen_test]
    fn test_js_primary_cta_absent() {
        assert!(js_primary_cta(JsValue::NULL).unwrap().is_none());
    }
}
