//! Window and body scroll helpers.
//!
//! Browser-only behavior; SSR paths no-op so server rendering stays
//! deterministic.

/// Current vertical scroll offset of the window, in pixels.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Lock or release body scrolling while the mobile menu is open.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let style = body.style();
            if locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
