//! Interval signatures
//!
//! A chord shape relative to a candidate root, encoded as a 12-bit mask.

use std::fmt::{Debug, Formatter};

use crate::pitch::{NoteSet, PitchClass, SEMITONES};

/// Number of distinct interval masks.
pub(crate) const MASK_SPACE: usize = 1 << SEMITONES;

/// Set of semitone distances above a root.
///
/// Bit `i` is set when some note lies `i` semitones above the root. Bit 0 is
/// never set: whether the root itself sounds is tracked separately, so one
/// mask never stands for two different chords.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct IntervalMask(u16);

/// Whether the candidate root must be one of the sounding notes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RootMode {
    /// The root must sound; otherwise no mask is built.
    Grounded,
    /// The root may be implied by the other notes.
    Virtual,
}

impl IntervalMask {
    /// Build a mask from a list of intervals. Unison and values of 12 or more are ignored.
    pub const fn from_intervals(intervals: &[u8]) -> IntervalMask {
        let mut bits = 0u16;
        let mut i = 0;
        while i < intervals.len() {
            let interval = intervals[i] as usize;
            if interval > 0 && interval < SEMITONES {
                bits |= 1 << interval;
            }
            i += 1;
        }
        IntervalMask(bits)
    }

    /// Signature of `notes` above `root`.
    ///
    /// In [`RootMode::Grounded`] this returns `None` when `root` is not sounding.
    /// Every other sounding pitch class contributes its upward distance from
    /// `root`; octave doublings collapse onto the same bit.
    pub fn of(notes: &NoteSet, root: PitchClass, mode: RootMode) -> Option<IntervalMask> {
        if mode == RootMode::Grounded && !notes.contains(root) {
            return None;
        }
        let mask = notes
            .iter()
            .filter(|&pc| pc != root)
            .fold(0u16, |bits, pc| bits | 1 << root.interval_to(pc));
        Some(IntervalMask(mask))
    }

    /// Raw 12-bit value.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether a note lies `interval` semitones above the root.
    pub const fn contains(self, interval: usize) -> bool {
        interval < SEMITONES && self.0 & (1 << interval) != 0
    }

    /// Number of distinct intervals.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no note other than the root is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Intervals in ascending order.
    pub fn intervals(self) -> impl Iterator<Item = usize> {
        (1..SEMITONES).filter(move |&i| self.contains(i))
    }
}

impl Debug for IntervalMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.intervals()).finish()
    }
}
