//! Property tests: naming depends only on pitch classes, bass and options.

use midi_chord_detector::{
    patterns::{self, ChordPattern, CHORD_PATTERNS},
    ChordDetector, IntervalMask, Inversion, NoteSet, PitchClass, RootMode,
};
use proptest::prelude::*;

/// Head start given to the bass note when it is a candidate root.
const BASS_BONUS: u16 = 10;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Any list of valid MIDI notes, including duplicates.
fn arb_notes() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..=127, 0..10)
}

/// Any detector configuration.
fn arb_detector() -> impl Strategy<Value = ChordDetector> {
    (any::<bool>(), any::<bool>()).prop_map(|(flats, slash)| {
        ChordDetector::builder()
            .use_flats(flats)
            .use_slash(slash)
            .build()
    })
}

/// Chords whose inversions have no competing reading over their bass.
fn arb_unambiguous_shape() -> impl Strategy<Value = &'static [i32]> {
    prop_oneof![
        Just(&[0, 4, 7][..]),
        Just(&[0, 3, 7][..]),
        Just(&[0, 4, 7, 10][..]),
        Just(&[0, 4, 7, 11][..]),
        Just(&[0, 2, 4, 7, 10][..]),
    ]
}

/// Root position chords from the catalog, as intervals above the root.
fn arb_shape() -> impl Strategy<Value = &'static [i32]> {
    prop_oneof![
        Just(&[0, 4, 7][..]),
        Just(&[0, 3, 7][..]),
        Just(&[0, 4, 7, 10][..]),
        Just(&[0, 4, 7, 11][..]),
        Just(&[0, 3, 7, 10][..]),
        Just(&[0, 2, 4, 7, 10][..]),
        Just(&[0, 4, 7, 9][..]),
    ]
}

/// A catalog shape voiced above a root, with one of its notes dropped an
/// octave to become the bass.
fn arb_catalog_voicing() -> impl Strategy<Value = Vec<i32>> {
    (
        prop::sample::select(CHORD_PATTERNS),
        36i32..72,
        any::<prop::sample::Index>(),
    )
        .prop_map(|(pattern, root, bass): (ChordPattern, i32, prop::sample::Index)| {
            let mut notes: Vec<i32> = std::iter::once(root)
                .chain(pattern.mask.intervals().map(|iv| root + iv as i32))
                .collect();
            let lowered = bass.index(notes.len());
            notes[lowered] -= 12;
            notes
        })
}

/// Raw catalog priority of the notes above `root`, if they form a known shape.
fn priority_over(set: &NoteSet, root: PitchClass) -> Option<u16> {
    IntervalMask::of(set, root, RootMode::Grounded)
        .and_then(patterns::lookup)
        .map(|pattern| pattern.priority)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The same input always yields the same result.
    #[test]
    fn analysis_is_pure(notes in arb_notes(), detector in arb_detector()) {
        prop_assert_eq!(detector.analyze(&notes), detector.analyze(&notes));
    }

    /// Input order never matters.
    #[test]
    fn order_is_irrelevant(notes in arb_notes(), detector in arb_detector()) {
        let mut reversed = notes.clone();
        reversed.reverse();
        let mut sorted = notes.clone();
        sorted.sort_unstable();
        let expected = detector.analyze(&notes);
        prop_assert_eq!(detector.analyze(&reversed), expected);
        prop_assert_eq!(detector.analyze(&sorted), expected);
    }

    /// Doubling sounding notes in higher octaves keeps the chord.
    #[test]
    fn octave_doublings_are_invisible(
        notes in prop::collection::vec(24i32..=96, 1..8),
        picks in prop::collection::vec((any::<prop::sample::Index>(), 1i32..=2), 0..4),
        detector in arb_detector(),
    ) {
        let mut doubled = notes.clone();
        for (index, octaves) in picks {
            doubled.push(notes[index.index(notes.len())] + 12 * octaves);
        }
        prop_assert_eq!(detector.analyze(&doubled), detector.analyze(&notes));
    }

    /// Values outside the MIDI range are ignored.
    #[test]
    fn out_of_range_notes_are_dropped(
        notes in arb_notes(),
        noise in prop::collection::vec(prop_oneof![-500i32..0, 128i32..1000], 0..5),
        detector in arb_detector(),
    ) {
        let mut noisy = notes.clone();
        noisy.extend(noise);
        prop_assert_eq!(detector.analyze(&noisy), detector.analyze(&notes));
    }

    /// Without slash notation every voicing of a chord gets the same name.
    #[test]
    fn inversions_share_a_name_without_slash(
        shape in arb_unambiguous_shape(),
        root in 48i32..60,
        rotation in 0usize..3,
    ) {
        let detector = ChordDetector::new();
        let mut voicing: Vec<i32> = shape.iter().map(|iv| root + iv).collect();
        for note in voicing.iter_mut().take(rotation) {
            *note += 12;
        }
        let root_position: Vec<i32> = shape.iter().map(|iv| root + iv).collect();

        let chord = detector.analyze(&voicing);
        prop_assert!(!chord.is_slash_chord);
        prop_assert_eq!(chord.root, detector.analyze(&root_position).root);
    }

    /// Slash notation appears exactly when the root is off the bass.
    #[test]
    fn slash_flag_tracks_root_and_bass(notes in arb_notes(), detector in arb_detector()) {
        let chord = detector.analyze(&notes);
        let off_bass = chord.root.is_some() && chord.root != chord.bass;
        prop_assert_eq!(chord.is_slash_chord, detector.use_slash() && off_bass);
        if chord.is_slash_chord {
            let bass_suffix = format!("/{}", chord.bass_note_name());
            prop_assert!(chord.full_name().ends_with(&bass_suffix));
        } else {
            prop_assert_eq!(chord.full_name(), chord.chord_name());
        }
    }

    /// Root position chords are reported with the bass as root.
    #[test]
    fn root_position_wins(shape in arb_shape(), root in 36i32..72, detector in arb_detector()) {
        let notes: Vec<i32> = shape.iter().map(|iv| root + iv).collect();
        let chord = detector.analyze(&notes);
        prop_assert_eq!(chord.inversion(), Some(Inversion::Root));
        prop_assert!(!chord.is_slash_chord);
    }

    /// The bass is the lowest note, never just the lowest pitch class.
    #[test]
    fn bass_is_lowest_note(notes in prop::collection::vec(0i32..=127, 1..10)) {
        let set = NoteSet::from_midi(&notes).unwrap();
        let lowest = notes.iter().min().copied().unwrap();
        prop_assert_eq!(set.bass().index() as i32, lowest % 12);
        prop_assert!(set.len() <= 12);
    }

    /// Resolved chords always have a root that is sounding.
    #[test]
    fn resolved_root_is_sounding(notes in arb_notes(), detector in arb_detector()) {
        if let (Some(root), Some(set)) = (detector.analyze(&notes).root, NoteSet::from_midi(&notes)) {
            prop_assert!(set.contains(root));
        }
    }

    /// Slash notation adds a bass to the name but never changes the chord.
    #[test]
    fn slash_notation_keeps_chord_name(notes in arb_notes(), flats in any::<bool>()) {
        let plain = ChordDetector::builder().use_flats(flats).build();
        let slash = ChordDetector::builder().use_flats(flats).use_slash(true).build();
        prop_assert_eq!(slash.analyze(&notes).chord_name(), plain.analyze(&notes).chord_name());
    }

    /// A reading over another root only beats the bass root when its raw
    /// priority is higher by at least the bass bonus.
    #[test]
    fn bass_root_wins_unless_clearly_outranked(notes in arb_catalog_voicing()) {
        let set = NoteSet::from_midi(&notes).unwrap();
        let chord = ChordDetector::new().analyze(&notes);
        let root = chord.root.unwrap();

        if let Some(bass_priority) = priority_over(&set, set.bass()) {
            if root != set.bass() {
                let winner = priority_over(&set, root).unwrap();
                prop_assert!(bass_priority + BASS_BONUS <= winner);
            }
        }
    }
}
