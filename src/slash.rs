//! Slash chord resolution
//!
//! When the grounded scan has no confident reading, the bass is explained as a
//! member of a chord built on some other root. Roots are searched without the
//! bass bonus. A root that is not sounding is only ever named through the
//! second-fourth rule below; every other reading needs its root to sound.

use tracing::trace;

use crate::{
    interval::{IntervalMask, RootMode},
    patterns::{self, ChordPattern, PatternKind},
    pitch::{NoteSet, PitchClass},
    selector::{keep_best, MatchCandidate},
};

/// Grounded scores below this, with the root off the bass, are not trusted.
pub(crate) const CONFIDENT_SCORE: u16 = 50;

/// Preference of the minor reading over the literal second-fourth shape.
pub(crate) const SECOND_FOURTH_BONUS: u16 = 10;

/// Whether the grounded result should be replaced by slash resolution.
pub(crate) fn needs_resolution(grounded: Option<MatchCandidate>, bass: PitchClass) -> bool {
    match grounded {
        None => true,
        Some(found) => found.root != bass && found.score < CONFIDENT_SCORE,
    }
}

/// Best reading of `notes` whose root is not the bass.
pub(crate) fn resolve_slash(notes: &NoteSet) -> Option<MatchCandidate> {
    let bass = notes.bass();
    let mut best = None;

    for candidate in PitchClass::ALL {
        if candidate == bass {
            continue;
        }
        let Some(mask) = IntervalMask::of(notes, candidate, RootMode::Virtual) else {
            continue;
        };
        if !is_implied(notes, candidate, mask) {
            continue;
        }
        let Some(pattern) = patterns::lookup(mask) else {
            continue;
        };

        let reading = match pattern.kind {
            PatternKind::SecondFourth => reinterpret_second_fourth(notes, candidate, pattern),
            PatternKind::Plain if notes.contains(candidate) => Some(MatchCandidate::from_pattern(
                candidate,
                pattern,
                pattern.priority,
            )),
            PatternKind::Plain => None,
        };
        if let Some(reading) = reading {
            keep_best(&mut best, reading);
        }
    }

    best
}

/// The bass must lie above `candidate`, together with at least one other
/// note, which may be the candidate itself.
fn is_implied(notes: &NoteSet, candidate: PitchClass, mask: IntervalMask) -> bool {
    mask.contains(candidate.interval_to(notes.bass()))
        && (notes.contains(candidate) || mask.len() >= 2)
}

/// Second-fourth rule.
///
/// A root, major second and perfect fourth above `candidate` (C D F over C)
/// is read as a minor chord without its fifth, rooted on the second (D), when
/// the minor third above that second is sounding. The suffix is the catalog
/// entry for the notes above the new root, so the reading names the chord the
/// same way the grounded scan does. Scores [`SECOND_FOURTH_BONUS`] above the
/// literal shape.
pub(crate) fn reinterpret_second_fourth(
    notes: &NoteSet,
    candidate: PitchClass,
    pattern: &ChordPattern,
) -> Option<MatchCandidate> {
    let root = candidate.transpose(2);
    if !notes.contains(root.transpose(3)) {
        return None;
    }
    let mask = IntervalMask::of(notes, root, RootMode::Grounded)?;
    let minor = patterns::lookup(mask)?;

    trace!(
        %candidate,
        %root,
        suffix = minor.suffix,
        "reading second-fourth shape as minor without fifth"
    );
    Some(MatchCandidate::from_pattern(
        root,
        minor,
        pattern.priority + SECOND_FOURTH_BONUS,
    ))
}
