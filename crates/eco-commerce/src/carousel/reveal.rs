//! Scroll-reveal bookkeeping for product tiles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Edge a tile slides in from when it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideOrigin {
    Left,
    Right,
}

impl SlideOrigin {
    /// Even positions come from the left, odd from the right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            SlideOrigin::Left
        } else {
            SlideOrigin::Right
        }
    }
}

/// Tracks which tile positions are currently revealed.
///
/// A tile that scrolls out of view is reset so it animates again the next
/// time it enters.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    entered: BTreeSet<usize>,
}

impl RevealSet {
    /// Create an empty set; nothing is revealed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a viewport intersection change for `index`.
    ///
    /// Returns `true` if the tile changed state.
    pub fn observe(&mut self, index: usize, visible: bool) -> bool {
        if visible {
            self.entered.insert(index)
        } else {
            self.entered.remove(&index)
        }
    }

    /// Check if the tile at `index` is in its entered state.
    pub fn is_entered(&self, index: usize) -> bool {
        self.entered.contains(&index)
    }

    /// Where the tile at `index` should rest: `None` once entered, otherwise
    /// the edge it waits at.
    pub fn offscreen_origin(&self, index: usize) -> Option<SlideOrigin> {
        if self.is_entered(index) {
            None
        } else {
            Some(SlideOrigin::for_index(index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_origin() {
        assert_eq!(SlideOrigin::for_index(0), SlideOrigin::Left);
        assert_eq!(SlideOrigin::for_index(1), SlideOrigin::Right);
        assert_eq!(SlideOrigin::for_index(6), SlideOrigin::Left);
    }

    #[test]
    fn test_reveal_resets_on_leave() {
        let mut reveal = RevealSet::new();
        assert_eq!(reveal.offscreen_origin(3), Some(SlideOrigin::Right));

        assert!(reveal.observe(3, true));
        assert!(!reveal.observe(3, true));
        assert_eq!(reveal.offscreen_origin(3), None);

        assert!(reveal.observe(3, false));
        assert!(!reveal.is_entered(3));
    }
}
