//! Full-page navigation.
//!
//! Redirects here deliberately reload the document rather than routing
//! client-side: every page entry must pass back through the access guard.

/// Load `target` in the current window. No-op outside the browser.
pub fn go_to(target: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
    }
}
