//! Transient UI state: overlay open/closed flags and hover flags.

use std::str::FromStr;

/// Open/closed flag for modal-like overlays (fit guide, cart drawer backdrop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

impl Overlay {
    #[must_use]
    pub const fn open(self) -> Self {
        Self::Open
    }

    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for Overlay {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

impl FromStr for Overlay {
    type Err = std::convert::Infallible;

    /// `1`, `true`, `open` and `yes` mean open; anything else means closed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "open" | "yes"
        )))
    }
}

/// Hover flag for image-swap effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    pub const fn enter(&mut self) {
        self.hovered = true;
    }

    pub const fn leave(&mut self) {
        self.hovered = false;
    }

    #[must_use]
    pub const fn is_hovered(self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_transitions() {
        let overlay = Overlay::default();
        assert!(!overlay.is_open());
        assert!(overlay.open().is_open());
        assert!(!overlay.open().close().is_open());
        assert!(overlay.toggle().is_open());
        assert!(!overlay.toggle().toggle().is_open());
    }

    #[test]
    fn test_overlay_from_query_value() {
        assert_eq!("true".parse(), Ok(Overlay::Open));
        assert_eq!("1".parse(), Ok(Overlay::Open));
        assert_eq!("0".parse(), Ok(Overlay::Closed));
        assert_eq!("".parse(), Ok(Overlay::Closed));
    }

    #[test]
    fn test_hover_enter_leave() {
        let mut hover = HoverState::default();
        assert!(!hover.is_hovered());
        hover.enter();
        assert!(hover.is_hovered());
        hover.leave();
        assert!(!hover.is_hovered());
    }
}
