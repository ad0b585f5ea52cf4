//! Carousel navigation state.
//!
//! The index is kept in `[0, len - 1]` (or `0` for an empty carousel). Each
//! navigation returns the pixel offset the viewport should smooth-scroll to.

use std::str::FromStr;

/// Fixed gap between slides, in pixels.
pub const SLIDE_GAP: u32 = 10;

/// Navigation request carried by a gallery fragment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    JumpTo(usize),
}

impl FromStr for CarouselAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            other => other.parse().map(Self::JumpTo).map_err(|_| ()),
        }
    }
}

/// Index into an ordered sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    slides: Vec<String>,
    index: usize,
}

impl CarouselState {
    /// Carousel positioned on the first slide.
    #[must_use]
    pub const fn new(slides: Vec<String>) -> Self {
        Self { slides, index: 0 }
    }

    /// Carousel positioned at `index`, clamped to the valid range.
    #[must_use]
    pub fn at(slides: Vec<String>, index: usize) -> Self {
        let mut state = Self::new(slides);
        state.index = state.clamp(index);
        state
    }

    #[must_use]
    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.slides.get(self.index).map(String::as_str)
    }

    /// Whether `advance` would move the index.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.index + 1 < self.len()
    }

    /// Whether `retreat` would move the index.
    #[must_use]
    pub const fn can_retreat(&self) -> bool {
        self.index > 0
    }

    /// Move forward one slide, saturating at the last slide.
    pub fn advance(&mut self, slide_width: u32) -> u32 {
        if self.can_advance() {
            self.index += 1;
        }
        self.scroll_offset(slide_width)
    }

    /// Move back one slide, saturating at the first slide.
    pub fn retreat(&mut self, slide_width: u32) -> u32 {
        self.index = self.index.saturating_sub(1);
        self.scroll_offset(slide_width)
    }

    /// Jump to `index`, clamped to the valid range.
    pub fn jump_to(&mut self, index: usize, slide_width: u32) -> u32 {
        self.index = self.clamp(index);
        self.scroll_offset(slide_width)
    }

    /// Apply a navigation request.
    pub fn apply(&mut self, action: CarouselAction, slide_width: u32) -> u32 {
        match action {
            CarouselAction::Next => self.advance(slide_width),
            CarouselAction::Prev => self.retreat(slide_width),
            CarouselAction::JumpTo(index) => self.jump_to(index, slide_width),
        }
    }

    /// Offset of the current slide: `index * (slide_width + SLIDE_GAP)`.
    #[must_use]
    pub fn scroll_offset(&self, slide_width: u32) -> u32 {
        u32::try_from(self.index)
            .unwrap_or(u32::MAX)
            .saturating_mul(slide_width.saturating_add(SLIDE_GAP))
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len().saturating_sub(1))
    }
}

// =============================================================================
// StepScroller
// =============================================================================

/// Track geometry for the featured products row.
///
/// Rendered as data attributes; the row's script moves the viewport by
/// `STEP` pixels per click and clamps it to `track_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepScroller {
    track_width: u32,
}

impl StepScroller {
    pub const STEP: u32 = 420;
    pub const CARD_WIDTH: u32 = 401;

    /// Scroller over `cards` product cards.
    #[must_use]
    pub fn new(cards: usize) -> Self {
        let cards = u32::try_from(cards).unwrap_or(u32::MAX);
        let gaps = cards.saturating_sub(1).saturating_mul(SLIDE_GAP);
        Self {
            track_width: cards.saturating_mul(Self::CARD_WIDTH).saturating_add(gaps),
        }
    }

    /// Total width of the card track.
    #[must_use]
    pub const fn track_width(&self) -> u32 {
        self.track_width
    }
}
