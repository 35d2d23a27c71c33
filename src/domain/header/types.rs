use std::collections::HashMap;
use std::rc::Rc;

use super::protocol::{breadcrumb_click_id, DASHBOARD_ORIGIN};
use super::url::ensure_https;

/// A locally held click handler. Invoked on the page's event loop when the
/// host reports the matching UI element was activated.
pub type Action = Rc<dyn Fn()>;

/// One entry of the embedded page's breadcrumb trail.
///
/// Identity is positional: the item's index in the sequence is the only key
/// the host ever sees. Reordering or splicing the sequence between updates
/// can make an in-flight click resolve to a different item; callers that
/// mutate the trail should republish it wholesale.
pub struct Breadcrumb {
    pub label: String,
    pub on_activate: Option<Action>,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_activate: None,
        }
    }

    pub fn with_action(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            on_activate: Some(action),
        }
    }
}

/// The single optional call-to-action button of the embedded page.
pub struct PrimaryCta {
    pub label: String,
    pub on_activate: Option<Action>,
}

impl PrimaryCta {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_activate: None,
        }
    }

    pub fn with_action(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            on_activate: Some(action),
        }
    }
}

/// Mapping from synthetic click-back id to the locally held action.
///
/// Rebuilt wholesale whenever the source sequence changes; ids exist only for
/// items that declared an action.
#[derive(Default)]
pub struct CallbackRegistry {
    entries: HashMap<String, Action>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_breadcrumbs(items: &[Breadcrumb]) -> Self {
        let mut entries = HashMap::new();
        for (idx, item) in items.iter().enumerate() {
            if let Some(action) = &item.on_activate {
                entries.insert(breadcrumb_click_id(idx), Rc::clone(action));
            }
        }
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Caller-supplied configuration. `portalUrl` is the optional secondary
/// destination, normalized before use.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default)]
    pub portal_url: Option<String>,
}

/// The allow-listed recipient addresses for outbound descriptors: the fixed
/// dashboard origin plus the optional portal address from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustedDestinations {
    dashboard: &'static str,
    portal: Option<String>,
}

impl TrustedDestinations {
    pub fn from_config(config: &HeaderConfig) -> Self {
        Self {
            dashboard: DASHBOARD_ORIGIN,
            portal: config.portal_url.as_deref().map(ensure_https),
        }
    }

    pub fn dashboard(&self) -> &str {
        self.dashboard
    }

    pub fn portal(&self) -> Option<&str> {
        self.portal.as_deref()
    }
}

impl Default for TrustedDestinations {
    fn default() -> Self {
        Self::from_config(&HeaderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn noop_action() -> Action {
        Rc::new(|| {})
    }

    #[test]
    fn test_registry_holds_only_action_bearing_items() {
        let items = vec![
            Breadcrumb::with_action("Home", noop_action()),
            Breadcrumb::new("Projects"),
            Breadcrumb::with_action("Settings", noop_action()),
        ];

        let registry = CallbackRegistry::from_breadcrumbs(&items);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("header.breadcrumbs.0"));
        assert!(!registry.contains("header.breadcrumbs.1"));
        assert!(registry.contains("header.breadcrumbs.2"));
    }

    #[test]
    fn test_registry_invokes_matching_action() {
        let hits = Rc::new(Cell::new(0));
        let hits_clone = Rc::clone(&hits);
        let items = vec![Breadcrumb::with_action(
            "Home",
            Rc::new(move || hits_clone.set(hits_clone.get() + 1)),
        )];

        let registry = CallbackRegistry::from_breadcrumbs(&items);
        let action = registry.get("header.breadcrumbs.0").cloned();
        action.expect("action should be registered")();

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_registry_empty_for_empty_trail() {
        let registry = CallbackRegistry::from_breadcrumbs(&[]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_config_deserializes_camel_case() {
        let config: HeaderConfig =
            serde_json::from_value(serde_json::json!({ "portalUrl": "portal.example.com" }))
                .unwrap();
        assert_eq!(config.portal_url.as_deref(), Some("portal.example.com"));
    }

    #[test]
    fn test_config_portal_url_optional() {
        let config: HeaderConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config, HeaderConfig::default());
    }

    #[test]
    fn test_destinations_normalize_portal() {
        let destinations = TrustedDestinations::from_config(&HeaderConfig {
            portal_url: Some("portal.example.com".to_string()),
        });

        assert_eq!(destinations.dashboard(), DASHBOARD_ORIGIN);
        assert_eq!(destinations.portal(), Some("https://portal.example.com"));
    }

    #[test]
    fn test_destinations_without_portal() {
        let destinations = TrustedDestinations::default();
        assert_eq!(destinations.dashboard(), DASHBOARD_ORIGIN);
        assert!(destinations.portal().is_none());
    }
}
