#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

// Bridge modules
pub mod breadcrumbs;
pub mod dispatch;
pub mod errors;
pub mod facades;
#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod primary_cta;

// Re-exports for embedding crates and tests
pub use breadcrumbs::BreadcrumbsBinding;
pub use domain::header::{Breadcrumb, HeaderConfig, PrimaryCta};
pub use platform::Platform;
pub use primary_cta::PrimaryCtaBinding;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
