//! Injectable random-index provider for shuffle mode
//!
//! Randomness lives behind a trait so the "never repeat the immediately
//! preceding index" invariant is deterministically testable.

use rand::Rng;

/// Picks the next track index under shuffle
pub trait IndexPicker: Send {
    /// Pick an index in `[0, len)`, different from `current` when `len > 1`
    fn pick(&mut self, len: usize, current: usize) -> usize;
}

/// Uniform random picker
///
/// Draws from the `len - 1` indices other than `current`, so the current
/// track is never re-picked when an alternative exists.
pub struct RandomIndexPicker;

impl IndexPicker for RandomIndexPicker {
    fn pick(&mut self, len: usize, current: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let r = rand::thread_rng().gen_range(0..len - 1);
        if r >= current {
            r + 1
        } else {
            r
        }
    }
}
