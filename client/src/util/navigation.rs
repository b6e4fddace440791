//! Full page navigation.
//!
//! Login and logout end with a document load rather than a router
//! transition, so every signal (lists, panels) starts fresh for the new
//! session.

/// Replace the current document with `path`. No-op outside the browser.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(path) {
                log::warn!("navigation to {path} failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
