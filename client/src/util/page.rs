//! Whole-page navigation helpers.
//!
//! A successful comment submit refreshes the course list with a full reload so
//! every row's commented state comes straight from the server.

/// Reload the current document. No-op outside the browser.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::warn!("page reload failed: {e:?}");
            }
        }
    }
}

/// Hard navigation to `href`, dropping client state.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = href;
}
