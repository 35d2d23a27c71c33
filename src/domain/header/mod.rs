pub mod protocol;
pub mod types;
pub mod url;

pub use protocol::{
    breadcrumb_click_id, BreadcrumbEntry, ClickEvent, HeaderDescriptor, DASHBOARD_ORIGIN,
    PRIMARY_CTA_CLICK_ID,
};
pub use types::{Action, Breadcrumb, CallbackRegistry, HeaderConfig, PrimaryCta, TrustedDestinations};
pub use url::ensure_https;
