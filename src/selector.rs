//! Grounded root selection
//!
//! Every sounding pitch class is tried as the root; the best exact catalog
//! match wins, with a bonus for the root that is also the bass.

use crate::{
    interval::{IntervalMask, RootMode},
    patterns::{self, ChordPattern},
    pitch::{NoteSet, PitchClass},
};

/// Added to a match whose root is the bass note. A root position reading
/// beats any inversion whose raw priority is less than this much higher.
pub(crate) const BASS_BONUS: u16 = 10;

/// One interpretation of a note set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MatchCandidate {
    pub root: PitchClass,
    pub suffix: &'static str,
    pub score: u16,
}

impl MatchCandidate {
    pub(crate) fn from_pattern(root: PitchClass, pattern: &ChordPattern, score: u16) -> Self {
        MatchCandidate {
            root,
            suffix: pattern.suffix,
            score,
        }
    }
}

/// Keep `candidate` only if it strictly beats the current best, so earlier
/// candidates win ties.
pub(crate) fn keep_best(best: &mut Option<MatchCandidate>, candidate: MatchCandidate) {
    match *best {
        Some(current) if candidate.score <= current.score => {}
        _ => *best = Some(candidate),
    }
}

/// Best grounded interpretation of `notes`, scanning roots upward from C.
pub(crate) fn select_root(notes: &NoteSet) -> Option<MatchCandidate> {
    let mut best = None;

    for root in notes.iter() {
        let Some(mask) = IntervalMask::of(notes, root, RootMode::Grounded) else {
            continue;
        };
        if mask.is_empty() {
            continue;
        }
        let Some(pattern) = patterns::lookup(mask) else {
            continue;
        };

        let bonus = if root == notes.bass() { BASS_BONUS } else { 0 };
        keep_best(
            &mut best,
            MatchCandidate::from_pattern(root, pattern, pattern.priority + bonus),
        );
    }

    best
}
