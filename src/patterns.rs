//! Chord pattern catalog
//!
//! Every recognised chord shape as an exact interval mask, a suffix and a
//! priority. More specific shapes carry higher priorities; matching is
//! bit-for-bit, so a shape never matches a subset or superset of its notes.

use crate::interval::{IntervalMask, MASK_SPACE};

/// How a matched pattern is turned into a chord name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// Named directly by its suffix.
    Plain,
    /// Root, major second and perfect fourth. Literally a sus2sus4 chord but
    /// usually heard as an incomplete minor chord built on the second when
    /// it appears over a slash bass.
    SecondFourth,
}

/// One catalog entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChordPattern {
    /// Intervals above the root, root excluded.
    pub mask: IntervalMask,
    /// Quality suffix appended to the root name; empty for major.
    pub suffix: &'static str,
    /// Rank among matches; higher wins.
    pub priority: u16,
    /// Naming behaviour.
    pub kind: PatternKind,
}

const fn plain(intervals: &[u8], suffix: &'static str, priority: u16) -> ChordPattern {
    ChordPattern {
        mask: IntervalMask::from_intervals(intervals),
        suffix,
        priority,
        kind: PatternKind::Plain,
    }
}

/// All chord shapes in declaration order. For a given mask the first entry wins.
pub const CHORD_PATTERNS: &[ChordPattern] = &[
    // 11ths
    plain(&[2, 4, 5, 7, 10], "11", 100),
    plain(&[2, 4, 5, 7, 11], "maj11", 100),
    plain(&[2, 3, 5, 7, 10], "m11", 100),
    plain(&[2, 4, 5, 10], "11(omit5)", 95),
    plain(&[2, 4, 5, 11], "maj11(omit5)", 95),
    plain(&[2, 3, 5, 10], "m11(omit5)", 95),
    // 9ths
    plain(&[2, 4, 7, 10], "9", 90),
    plain(&[2, 4, 7, 11], "maj9", 90),
    plain(&[2, 3, 7, 10], "m9", 90),
    plain(&[2, 3, 7, 11], "mM9", 90),
    plain(&[2, 4, 10], "9(omit5)", 85),
    plain(&[2, 4, 11], "maj9(omit5)", 85),
    plain(&[2, 3, 10], "m9(omit5)", 85),
    // 7ths
    plain(&[4, 7, 10], "7", 80),
    plain(&[4, 7, 11], "maj7", 80),
    plain(&[3, 7, 10], "m7", 80),
    plain(&[3, 7, 11], "mM7", 80),
    plain(&[4, 6, 10], "7b5", 75),
    plain(&[3, 6, 10], "m7b5", 75),
    plain(&[3, 6, 9], "o7", 75),
    plain(&[5, 7, 10], "7sus4", 70),
    plain(&[2, 7, 10], "7sus2", 70),
    plain(&[4, 10], "7(omit5)", 72),
    plain(&[4, 11], "maj7(omit5)", 72),
    plain(&[3, 10], "m7(omit5)", 72),
    plain(&[3, 11], "mM7(omit5)", 72),
    plain(&[5, 10], "7sus4(omit5)", 35),
    plain(&[2, 10], "7sus2(omit5)", 35),
    // 6ths
    plain(&[4, 7, 9], "6", 78),
    plain(&[3, 7, 9], "m6", 78),
    plain(&[4, 9], "6(omit5)", 45),
    plain(&[3, 9], "m6(omit5)", 45),
    // added tones
    plain(&[4, 5, 7], "add11", 65),
    plain(&[3, 5, 7], "madd11", 65),
    plain(&[4, 5], "add11(omit5)", 68),
    plain(&[3, 5], "madd11(omit5)", 68),
    plain(&[2, 4, 7], "add9", 60),
    plain(&[2, 3, 7], "madd9", 60),
    plain(&[2, 4], "add9(omit5)", 58),
    plain(&[2, 3], "madd9(omit5)", 58),
    // triads
    plain(&[4, 7], "", 60),
    plain(&[3, 7], "m", 60),
    plain(&[4, 8], "+", 45),
    plain(&[3, 6], "o", 45),
    plain(&[2, 7], "sus2", 40),
    plain(&[5, 7], "sus4", 40),
    ChordPattern {
        mask: IntervalMask::from_intervals(&[2, 5]),
        suffix: "sus2sus4",
        priority: 35,
        kind: PatternKind::SecondFourth,
    },
    // dyads
    plain(&[7], "5", 30),
    plain(&[5], "sus4(omit5)", 25),
    plain(&[2], "sus2(omit5)", 25),
    plain(&[4], "", 20),
    plain(&[3], "m", 20),
];

/// Catalog index plus one for every mask, zero where nothing matches.
static PATTERN_INDEX: [u8; MASK_SPACE] = build_index();

const fn build_index() -> [u8; MASK_SPACE] {
    assert!(CHORD_PATTERNS.len() < u8::MAX as usize);

    let mut index = [0u8; MASK_SPACE];
    let mut i = 0;
    while i < CHORD_PATTERNS.len() {
        let key = CHORD_PATTERNS[i].mask.bits() as usize;
        if index[key] == 0 {
            index[key] = (i + 1) as u8;
        }
        i += 1;
    }
    index
}

/// The catalog entry whose mask equals `mask` exactly.
#[inline]
pub fn lookup(mask: IntervalMask) -> Option<&'static ChordPattern> {
    match PATTERN_INDEX[mask.bits() as usize] {
        0 => None,
        slot => CHORD_PATTERNS.get(slot as usize - 1),
    }
}
