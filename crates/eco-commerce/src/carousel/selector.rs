//! Group carousel state machine.
//!
//! Slides through an ordered list showing `K` tiles, moving either a whole
//! group or a single tile per step (see [`Stride`]). An advance
//! is two-phase: [`GroupCarousel::begin_advance`] computes the pending
//! offset while the slide animates, and [`GroupCarousel::complete_advance`]
//! commits it once the animation reports it has finished. Renderers show
//! [`GroupCarousel::window`] next to [`GroupCarousel::pending_window`] during
//! the slide so visible content never changes mid-animation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::carousel::window::{true_mod, window_at, window_indices};

/// Slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Next group (`+1`).
    #[default]
    Forward,
    /// Previous group (`-1`).
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// How far one advance moves the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stride {
    /// A whole window (`K` tiles).
    #[default]
    Group,
    /// One tile.
    Single,
}

/// Where the carousel is in its advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No slide in flight.
    #[default]
    Idle,
    /// A slide has started; `pending` becomes the offset on completion.
    Transitioning {
        /// Offset to commit.
        pending: usize,
        /// Direction of the slide.
        direction: Direction,
    },
}

/// Why an advance request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceBlocked {
    /// Another slide is still animating.
    Transitioning,
    /// The pointer is over the carousel.
    Hovered,
    /// There is nothing to slide.
    Empty,
}

/// Cyclic K-of-N window selector with a pending/committed advance.
#[derive(Debug, Clone)]
pub struct GroupCarousel<T> {
    items: Vec<T>,
    visible: usize,
    stride: Stride,
    offset: usize,
    phase: Phase,
    hovered: bool,
    last_direction: Direction,
}

impl<T> GroupCarousel<T> {
    /// Create a carousel showing up to `visible` items at a time.
    pub fn new(items: Vec<T>, visible: usize) -> Self {
        Self {
            items,
            visible,
            stride: Stride::Group,
            offset: 0,
            phase: Phase::Idle,
            hovered: false,
            last_direction: Direction::Forward,
        }
    }

    /// Set how far each advance moves.
    pub fn with_stride(mut self, stride: Stride) -> Self {
        self.stride = stride;
        self
    }

    pub fn stride(&self) -> Stride {
        self.stride
    }

    /// Number of backing items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Backing items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// `K = min(visible, N)`.
    pub fn window_size(&self) -> usize {
        self.visible.min(self.items.len())
    }

    /// Tiles moved per advance: `K` for [`Stride::Group`], `1` for
    /// [`Stride::Single`] (`0` when empty).
    pub fn step_len(&self) -> usize {
        match self.stride {
            Stride::Group => self.window_size(),
            Stride::Single => self.items.len().min(1),
        }
    }

    /// Committed offset, always `< N` (or `0` when empty).
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a slide is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Direction of the most recent accepted advance.
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Check if the hover gate is closed.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Start sliding one step in `direction`.
    ///
    /// Dropped while a slide is in flight, while hovered, or when empty.
    pub fn try_begin_advance(&mut self, direction: Direction) -> Result<usize, AdvanceBlocked> {
        if self.is_transitioning() {
            return Err(AdvanceBlocked::Transitioning);
        }
        if self.hovered {
            return Err(AdvanceBlocked::Hovered);
        }
        if self.items.is_empty() {
            return Err(AdvanceBlocked::Empty);
        }

        let step = direction.sign() * self.step_len() as i64;
        let pending = true_mod(self.offset as i64 + step, self.items.len());
        self.last_direction = direction;
        self.phase = Phase::Transitioning { pending, direction };
        Ok(pending)
    }

    /// Like [`GroupCarousel::try_begin_advance`], reporting only whether the
    /// request was accepted.
    pub fn begin_advance(&mut self, direction: Direction) -> bool {
        match self.try_begin_advance(direction) {
            Ok(_) => true,
            Err(reason) => {
                debug!(?direction, ?reason, "advance dropped");
                false
            }
        }
    }

    /// Commit the pending offset. No-op when idle.
    pub fn complete_advance(&mut self) -> bool {
        match self.phase {
            Phase::Transitioning { pending, .. } => {
                self.offset = pending;
                self.phase = Phase::Idle;
                true
            }
            Phase::Idle => false,
        }
    }

    /// Begin and immediately complete, for surfaces without animation.
    pub fn advance(&mut self, direction: Direction) -> bool {
        self.begin_advance(direction) && self.complete_advance()
    }

    /// Items visible at the committed offset.
    pub fn window(&self) -> Vec<&T> {
        window_at(&self.items, self.offset as i64, self.window_size())
    }

    /// Backing indices of [`GroupCarousel::window`], for stable tile keys.
    pub fn window_indices(&self) -> Vec<usize> {
        window_indices(self.items.len(), self.offset as i64, self.window_size())
    }

    /// Items that slide in during the current transition.
    pub fn pending_window(&self) -> Option<Vec<&T>> {
        match self.phase {
            Phase::Transitioning { pending, .. } => Some(window_at(
                &self.items,
                pending as i64,
                self.window_size(),
            )),
            Phase::Idle => None,
        }
    }

    /// The window one forward step ahead, whether or not a slide is in
    /// flight.
    ///
    /// Renderers preload its images so the next slide is ready.
    pub fn upcoming_window(&self) -> Vec<&T> {
        let next = self.offset as i64 + self.step_len() as i64;
        window_at(&self.items, next, self.window_size())
    }

    /// Swap in a freshly loaded list. Cancels any slide in flight and
    /// re-normalizes the offset against the new length.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.offset = true_mod(self.offset as i64, items.len());
        self.items = items;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(n: usize) -> Vec<char> {
        ('a'..='z').take(n).collect()
    }

    fn window(c: &GroupCarousel<char>) -> String {
        c.window().into_iter().collect()
    }

    #[test]
    fn test_initial_state() {
        let c = GroupCarousel::new(letters(8), 4);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(window(&c), "abcd");
    }

    #[test]
    fn test_forward_advance_is_two_phase() {
        let mut c = GroupCarousel::new(letters(10), 4);

        assert!(c.begin_advance(Direction::Forward));
        assert_eq!(
            c.phase(),
            Phase::Transitioning {
                pending: 4,
                direction: Direction::Forward
            }
        );
        assert_eq!(window(&c), "abcd");
        let pending: String = c.pending_window().unwrap().into_iter().collect();
        assert_eq!(pending, "efgh");

        assert!(c.complete_advance());
        assert_eq!(c.offset(), 4);
        assert_eq!(window(&c), "efgh");
    }

    #[test]
    fn test_forward_wraps() {
        let mut c = GroupCarousel::new(letters(10), 4);
        c.advance(Direction::Forward);
        c.advance(Direction::Forward);
        assert_eq!(c.offset(), 8);
        assert_eq!(window(&c), "ijab");
    }

    #[test]
    fn test_backward_from_zero() {
        let mut c = GroupCarousel::new(letters(10), 4);
        assert!(c.advance(Direction::Backward));
        assert_eq!(c.offset(), 6);
        assert_eq!(window(&c), "ghij");
        assert_eq!(c.last_direction(), Direction::Backward);
    }

    #[test]
    fn test_guard_while_transitioning() {
        let mut c = GroupCarousel::new(letters(10), 4);
        assert!(c.begin_advance(Direction::Forward));
        let phase = c.phase();

        assert_eq!(
            c.try_begin_advance(Direction::Backward),
            Err(AdvanceBlocked::Transitioning)
        );
        assert_eq!(c.phase(), phase);
        assert_eq!(c.last_direction(), Direction::Forward);
    }

    #[test]
    fn test_hover_blocks_advance() {
        let mut c = GroupCarousel::new(letters(6), 2);
        c.set_hovered(true);
        assert_eq!(
            c.try_begin_advance(Direction::Forward),
            Err(AdvanceBlocked::Hovered)
        );
        c.set_hovered(false);
        assert!(c.begin_advance(Direction::Forward));
    }

    #[test]
    fn test_complete_when_idle_is_noop() {
        let mut c = GroupCarousel::new(letters(6), 2);
        assert!(!c.complete_advance());
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut c: GroupCarousel<char> = GroupCarousel::new(Vec::new(), 4);
        assert_eq!(c.window_size(), 0);
        assert!(c.window().is_empty());
        assert!(!c.begin_advance(Direction::Forward));
        assert!(!c.begin_advance(Direction::Backward));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.upcoming_window().is_empty());
    }

    #[test]
    fn test_fewer_items_than_visible() {
        let mut c = GroupCarousel::new(letters(3), 4);
        assert_eq!(c.window_size(), 3);
        assert_eq!(window(&c), "abc");
        c.advance(Direction::Forward);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_upcoming_window() {
        let c = GroupCarousel::new(letters(5), 2);
        let next: String = c.upcoming_window().into_iter().collect();
        assert_eq!(next, "cd");
    }

    #[test]
    fn test_replace_items_normalizes() {
        let mut c = GroupCarousel::new(letters(10), 4);
        c.advance(Direction::Forward);
        c.advance(Direction::Forward);
        c.begin_advance(Direction::Forward);

        c.replace_items(letters(5));
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.offset(), 3);

        c.replace_items(Vec::new());
        assert_eq!(c.offset(), 0);
        assert!(c.window().is_empty());
    }

    #[test]
    fn test_single_stride_moves_one_tile() {
        let mut c = GroupCarousel::new(letters(6), 4).with_stride(Stride::Single);
        assert_eq!(c.step_len(), 1);

        assert!(c.begin_advance(Direction::Forward));
        let pending: String = c.pending_window().unwrap().into_iter().collect();
        assert_eq!(pending, "bcde");
        c.complete_advance();
        assert_eq!(window(&c), "bcde");

        c.advance(Direction::Backward);
        c.advance(Direction::Backward);
        assert_eq!(c.offset(), 5);
        assert_eq!(window(&c), "fabc");
        let next: String = c.upcoming_window().into_iter().collect();
        assert_eq!(next, "abcd");
    }

    #[test]
    fn test_single_stride_empty_is_safe() {
        let mut c: GroupCarousel<char> =
            GroupCarousel::new(Vec::new(), 4).with_stride(Stride::Single);
        assert_eq!(c.step_len(), 0);
        assert!(!c.advance(Direction::Forward));
    }

    #[test]
    fn test_window_indices() {
        let mut c = GroupCarousel::new(letters(5), 3);
        c.advance(Direction::Backward);
        assert_eq!(c.window_indices(), vec![2, 3, 4]);
    }
}
