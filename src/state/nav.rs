//! Navigation bar state: scroll condensation and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the nav bar switches to its condensed style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether the nav bar should render in its condensed (scrolled) style.
///
/// Purely derived from the current offset; calling it twice with the same
/// offset always yields the same answer.
pub fn is_scrolled(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

/// UI state for the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Flip the mobile menu. The caller mirrors `menu_open` into the body
    /// scroll lock.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
