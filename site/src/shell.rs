//! Page shell state: the two UI flags behind the header and mobile menu.
//!
//! The flags live in an explicit value that is passed to the layout when
//! rendering. They change only through the named transitions below.

use serde::Serialize;

/// Vertical scroll offset (px) the page must exceed for the solid header.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Header look derived from [`ShellState::scrolled`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Page at (or near) the top
    Transparent,
    /// Page scrolled past the threshold
    Solid,
}

impl HeaderStyle {
    /// Value of the header's `data-state` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "transparent",
            HeaderStyle::Solid => "solid",
        }
    }
}

/// Runtime state owned by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShellState {
    scrolled: bool,
    menu_open: bool,
}

impl ShellState {
    /// Initial state: top of the page, menu closed.
    pub const fn new() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
        }
    }

    /// Whether the page is scrolled past [`SCROLL_THRESHOLD`].
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether the mobile menu overlay is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Header style for the current scroll flag.
    pub fn header_style(&self) -> HeaderStyle {
        if self.scrolled {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Transparent
        }
    }

    /// Re-evaluate the scroll flag for a new vertical offset.
    /// Returns `true` if the flag flipped.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Menu button press.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Active route changed: the menu is forced closed.
    pub fn on_route_change(&mut self) {
        self.menu_open = false;
    }

    /// State with the menu already open, for rendering previews.
    pub fn with_menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    /// State as if the page were scrolled to `offset_y`.
    pub fn with_scroll(mut self, offset_y: f64) -> Self {
        self.on_scroll(offset_y);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_transparent_and_closed() {
        let state = ShellState::new();
        assert!(!state.scrolled());
        assert!(!state.menu_open());
        assert_eq!(state.header_style(), HeaderStyle::Transparent);
        assert_eq!(state, ShellState::default());
    }

    #[test]
    fn threshold_is_strict() {
        let mut state = ShellState::new();
        assert!(!state.on_scroll(20.0));
        assert_eq!(state.header_style(), HeaderStyle::Transparent);
        assert!(state.on_scroll(20.5));
        assert_eq!(state.header_style(), HeaderStyle::Solid);
    }

    #[test]
    fn scroll_down_and_back_up() {
        let mut state = ShellState::new();
        assert!(!state.on_scroll(0.0));
        assert!(state.on_scroll(21.0));
        assert!(!state.on_scroll(400.0));
        assert!(state.scrolled());
        assert!(state.on_scroll(0.0));
        assert_eq!(state.header_style(), HeaderStyle::Transparent);
    }

    #[test]
    fn menu_toggles_and_closes_on_route_change() {
        let mut state = ShellState::new();
        state.toggle_menu();
        assert!(state.menu_open());
        state.toggle_menu();
        assert!(!state.menu_open());

        state.toggle_menu();
        state.on_route_change();
        assert!(!state.menu_open());
    }

    #[test]
    fn route_change_keeps_scroll_flag() {
        let mut state = ShellState::new().with_scroll(100.0).with_menu_open(true);
        state.on_route_change();
        assert!(state.scrolled());
        assert!(!state.menu_open());
    }
}
