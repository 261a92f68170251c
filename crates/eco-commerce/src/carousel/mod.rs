//! Rotating product carousels.
//!
//! Contains the cyclic window arithmetic, the group carousel state machine
//! and the per-tile reveal helpers.

mod reveal;
mod selector;
mod window;

pub use reveal::{RevealSet, SlideOrigin};
pub use selector::{AdvanceBlocked, Direction, GroupCarousel, Phase, Stride};
pub use window::{true_mod, window_at, window_indices};
