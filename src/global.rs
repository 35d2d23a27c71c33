use crate::errors::HeaderError;
use web_sys::Window;

pub fn window() -> Result<Window, HeaderError> {
    web_sys::window().ok_or(HeaderError::WindowUnavailable {
        message: "No Window found",
    })
}

/// The embedding frame's window. A page loaded at the top level is its own
/// parent, matching the browser's `window.parent` semantics.
pub fn parent_window() -> Result<Window, HeaderError> {
    let window = window()?;
    match window.parent() {
        Ok(Some(parent)) => Ok(parent),
        Ok(None) => Ok(window),
        Err(err) => Err(HeaderError::from(err)),
    }
}
