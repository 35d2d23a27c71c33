use serde::{Deserialize, Serialize};

use super::types::{Breadcrumb, PrimaryCta};

/// The hosting dashboard's origin. Always notified, regardless of
/// configuration.
pub const DASHBOARD_ORIGIN: &str = "https://dashboard.copilot.com";

/// Click-back id of the primary call-to-action. Fixed: at most one primary
/// action is ever registered per page.
pub const PRIMARY_CTA_CLICK_ID: &str = "header.primaryCta.onClick";

/// Click-back id of the breadcrumb at the given position.
pub fn breadcrumb_click_id(index: usize) -> String {
    format!("header.breadcrumbs.{index}")
}

/// One breadcrumb slot as the host sees it. `on_click` is the click-back id,
/// or the empty string for items with no action (the host must not issue a
/// click-back for those).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub label: String,
    #[serde(rename = "onClick")]
    pub on_click: String,
}

/// Outbound descriptor: the plain-data snapshot of header state posted to the
/// trusted destinations on every change and on teardown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HeaderDescriptor {
    #[serde(rename = "header.breadcrumbs")]
    Breadcrumbs { items: Vec<BreadcrumbEntry> },
    #[serde(rename = "header.primaryCta")]
    PrimaryCta {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(
            rename = "onClick",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        on_click: Option<String>,
    },
}

impl HeaderDescriptor {
    /// Derives the wire form of a breadcrumb trail. Slot count and order
    /// mirror the source exactly.
    pub fn breadcrumbs(items: &[Breadcrumb]) -> Self {
        HeaderDescriptor::Breadcrumbs {
            items: items
                .iter()
                .enumerate()
                .map(|(idx, item)| BreadcrumbEntry {
                    label: item.label.clone(),
                    on_click: if item.on_activate.is_some() {
                        breadcrumb_click_id(idx)
                    } else {
                        String::new()
                    },
                })
                .collect(),
        }
    }

    /// The teardown form: tells the host to clear its breadcrumb display.
    pub fn cleared_breadcrumbs() -> Self {
        HeaderDescriptor::Breadcrumbs { items: Vec::new() }
    }

    /// Derives the wire form of the primary action. Absent actions produce
    /// the type-only descriptor.
    pub fn primary_cta(value: Option<&PrimaryCta>) -> Self {
        match value {
            Some(cta) => HeaderDescriptor::PrimaryCta {
                label: Some(cta.label.clone()),
                on_click: Some(PRIMARY_CTA_CLICK_ID.to_string()),
            },
            None => Self::cleared_primary_cta(),
        }
    }

    pub fn cleared_primary_cta() -> Self {
        HeaderDescriptor::PrimaryCta {
            label: None,
            on_click: None,
        }
    }
}

/// Inbound click-back event from the host. Anything on the window channel
/// that does not parse into one of these shapes is not ours and is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClickEvent {
    #[serde(rename = "header.breadcrumbs.onClick")]
    Breadcrumb { id: String },
    #[serde(rename = "header.primaryCta.onClick")]
    PrimaryCta { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn test_breadcrumbs_descriptor_preserves_count_and_order() {
        let items = vec![
            Breadcrumb::with_action("Home", Rc::new(|| {})),
            Breadcrumb::new("Projects"),
            Breadcrumb::with_action("Settings", Rc::new(|| {})),
        ];

        let descriptor = HeaderDescriptor::breadcrumbs(&items);

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "type": "header.breadcrumbs",
                "items": [
                    { "label": "Home", "onClick": "header.breadcrumbs.0" },
                    { "label": "Projects", "onClick": "" },
                    { "label": "Settings", "onClick": "header.breadcrumbs.2" },
                ],
            })
        );
    }

    #[test]
    fn test_empty_trail_is_valid_wire_form() {
        assert_eq!(
            serde_json::to_value(HeaderDescriptor::breadcrumbs(&[])).unwrap(),
            json!({ "type": "header.breadcrumbs", "items": [] })
        );
    }

    #[test]
    fn test_cleared_primary_cta_is_type_only() {
        assert_eq!(
            serde_json::to_value(HeaderDescriptor::primary_cta(None)).unwrap(),
            json!({ "type": "header.primaryCta" })
        );
    }

    #[test]
    fn test_present_primary_cta_carries_fixed_id() {
        let cta = PrimaryCta::with_action("Buy", Rc::new(|| {}));
        assert_eq!(
            serde_json::to_value(HeaderDescriptor::primary_cta(Some(&cta))).unwrap(),
            json!({
                "type": "header.primaryCta",
                "label": "Buy",
                "onClick": "header.primaryCta.onClick",
            })
        );
    }

    #[test]
    fn test_primary_cta_without_action_still_advertises_click_id() {
        // The fixed id is positional in spirit: it names the single CTA slot,
        // not the presence of a handler. The binding decides at click time.
        let cta = PrimaryCta::new("Buy");
        assert_eq!(
            serde_json::to_value(HeaderDescriptor::primary_cta(Some(&cta))).unwrap(),
            json!({
                "type": "header.primaryCta",
                "label": "Buy",
                "onClick": "header.primaryCta.onClick",
            })
        );
    }

    #[test]
    fn test_click_event_parses() {
        let event: ClickEvent = serde_json::from_value(json!({
            "type": "header.breadcrumbs.onClick",
            "id": "header.breadcrumbs.1",
        }))
        .unwrap();

        assert_eq!(
            event,
            ClickEvent::Breadcrumb {
                id: "header.breadcrumbs.1".to_string()
            }
        );
    }

    #[test]
    fn test_click_event_rejects_unknown_type() {
        let result: Result<ClickEvent, _> =
            serde_json::from_value(json!({ "type": "header.unknown", "id": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_click_event_rejects_non_string_id() {
        let result: Result<ClickEvent, _> =
            serde_json::from_value(json!({ "type": "header.primaryCta.onClick", "id": 7 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_click_event_rejects_missing_id() {
        let result: Result<ClickEvent, _> =
            serde_json::from_value(json!({ "type": "header.breadcrumbs.onClick" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_click_event_tolerates_extra_fields() {
        let event: ClickEvent = serde_json::from_value(json!({
            "type": "header.primaryCta.onClick",
            "id": "header.primaryCta.onClick",
            "source": "dashboard",
        }))
        .unwrap();

        assert_eq!(
            event,
            ClickEvent::PrimaryCta {
                id: "header.primaryCta.onClick".to_string()
            }
        );
    }
}
