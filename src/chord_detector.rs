//! Chord Detector
//!
//! Real-time naming of chords from MIDI note numbers.
//!
//! Each call is a pure function of the notes and the detector's options: the
//! notes are reduced to pitch classes, every sounding pitch class is tried as
//! a root against the pattern catalog, and when slash notation is enabled and
//! no confident reading exists, the bass is explained as a member of a chord
//! built elsewhere. Nothing is allocated until a name is rendered.
//!
//! Ported and modified from the single-header C++ chord detector `chord_detector.h`.

use std::fmt::Display;
use thiserror::Error;
use tracing::trace;

use crate::{
    pitch::{NoteSet, PitchClass, Spelling},
    selector::{self, MatchCandidate},
    slash,
};

/// Errors when converting to pitch classes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// A pitch class index was not in `0..12`.
    #[error("pitch class must be in 0..12, got {0}")]
    PitchClassOutOfRange(i32),

    /// A note name could not be parsed.
    #[error("unrecognized note name `{0}`")]
    UnknownNoteName(String),
}

/// Which chord member is in the bass
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inversion {
    /// The root is in the bass.
    Root,
    /// The third (minor or major) is in the bass.
    First,
    /// The fifth (diminished or perfect) is in the bass.
    Second,
    /// The seventh (minor or major) is in the bass.
    Third,
    /// Some other tone is in the bass.
    Other,
}

impl Inversion {
    /// Classify by the distance from root up to bass, in semitones.
    pub const fn from_interval(semitones: usize) -> Inversion {
        match semitones % 12 {
            0 => Inversion::Root,
            3 | 4 => Inversion::First,
            6 | 7 => Inversion::Second,
            10 | 11 => Inversion::Third,
            _ => Inversion::Other,
        }
    }

    /// Classify a bass note against a chord root.
    pub const fn classify(root: PitchClass, bass: PitchClass) -> Inversion {
        Self::from_interval(root.interval_to(bass))
    }
}

impl Display for Inversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Inversion::Root => "root",
            Inversion::First => "1st",
            Inversion::Second => "2nd",
            Inversion::Third => "3rd",
            Inversion::Other => "other",
        })
    }
}

/// A chord identified from a set of notes.
///
/// An unresolved result has no `root`; its names are empty. Note that an
/// empty `suffix` on its own only means a major chord or a bare note.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChordResult {
    /// Root of the chord, `None` when no chord was identified.
    pub root: Option<PitchClass>,
    /// Pitch class of the lowest valid note, `None` when there were no valid notes.
    pub bass: Option<PitchClass>,
    /// Quality suffix, e.g. `"m7"`; empty for major chords and single notes.
    pub suffix: &'static str,
    /// Whether the chord is written over its bass, e.g. `C/E`.
    pub is_slash_chord: bool,
    /// Spelling used for rendered names.
    pub spelling: Spelling,
}

impl ChordResult {
    fn unresolved(bass: Option<PitchClass>, spelling: Spelling) -> Self {
        ChordResult {
            root: None,
            bass,
            suffix: "",
            is_slash_chord: false,
            spelling,
        }
    }

    /// Whether a chord was identified.
    pub const fn is_resolved(&self) -> bool {
        self.root.is_some()
    }

    /// Root name plus suffix without any bass, e.g. `"G7"`. Empty when unresolved.
    pub fn chord_name(&self) -> String {
        match self.root {
            Some(root) => format!("{}{}", root.name(self.spelling), self.suffix),
            None => String::new(),
        }
    }

    /// Name of the bass note, e.g. `"B"`. Empty when there were no valid notes.
    pub fn bass_note_name(&self) -> &'static str {
        self.bass.map_or("", |bass| bass.name(self.spelling))
    }

    /// Complete name, e.g. `"G7/B"` for a slash chord or `"G7"` otherwise.
    pub fn full_name(&self) -> String {
        self.to_string()
    }

    /// Which chord member is in the bass, regardless of slash notation.
    /// `None` when unresolved.
    pub fn inversion(&self) -> Option<Inversion> {
        Some(Inversion::classify(self.root?, self.bass?))
    }
}

impl Display for ChordResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(root) = self.root else {
            return Ok(());
        };
        write!(f, "{}{}", root.name(self.spelling), self.suffix)?;
        if self.is_slash_chord {
            write!(f, "/{}", self.bass_note_name())?;
        }
        Ok(())
    }
}

/// Builder for `ChordDetector` to customize naming
pub struct ChordDetectorBuilder {
    spelling: Spelling,
    use_slash: bool,
}

impl ChordDetectorBuilder {
    /// Create a new builder with sharp spelling and no slash notation
    pub fn new() -> Self {
        ChordDetectorBuilder {
            spelling: Spelling::Sharp,
            use_slash: false,
        }
    }

    /// Spell accidentals as flats (`Db`) instead of sharps (`C#`)
    pub fn use_flats(mut self, value: bool) -> Self {
        self.spelling = if value { Spelling::Flat } else { Spelling::Sharp };
        self
    }

    /// Set the spelling directly
    pub fn spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = spelling;
        self
    }

    /// Name inversions over their bass note (`C/E`) and resolve slash chords
    pub fn use_slash(mut self, value: bool) -> Self {
        self.use_slash = value;
        self
    }

    /// Build the `ChordDetector`
    pub fn build(self) -> ChordDetector {
        ChordDetector {
            spelling: self.spelling,
            use_slash: self.use_slash,
        }
    }
}

impl Default for ChordDetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main chord detector
///
/// Holds only options, so one detector can be shared freely across threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChordDetector {
    spelling: Spelling,
    use_slash: bool,
}

impl ChordDetector {
    /// Return a builder to customize spelling and slash notation
    pub fn builder() -> ChordDetectorBuilder {
        ChordDetectorBuilder::new()
    }

    /// Create a detector with sharp spelling and no slash notation
    pub fn new() -> Self {
        ChordDetectorBuilder::new().build()
    }

    /// Spelling used for names.
    pub const fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Whether slash notation is enabled.
    pub const fn use_slash(&self) -> bool {
        self.use_slash
    }

    /// Identify the chord formed by MIDI note numbers.
    ///
    /// Order and duplicates do not matter. Values outside `0..=127` are ignored.
    /// Returns an unresolved result when no valid note remains or the notes fit
    /// no known chord shape.
    pub fn analyze(&self, notes: &[i32]) -> ChordResult {
        let Some(notes) = NoteSet::from_midi(notes) else {
            return ChordResult::unresolved(None, self.spelling);
        };
        self.analyze_set(&notes)
    }

    /// Identify the chord formed by an already extracted note set.
    pub fn analyze_set(&self, notes: &NoteSet) -> ChordResult {
        let bass = notes.bass();

        if notes.len() == 1 {
            return ChordResult {
                root: Some(bass),
                bass: Some(bass),
                suffix: "",
                is_slash_chord: false,
                spelling: self.spelling,
            };
        }

        let mut best = selector::select_root(notes);
        if self.use_slash && slash::needs_resolution(best, bass) {
            trace!(%bass, "no confident root position reading, resolving slash chord");
            if let Some(resolved) = slash::resolve_slash(notes) {
                best = Some(resolved);
            }
        }

        match best {
            Some(found) => self.assemble(found, bass),
            None => {
                trace!(%bass, pitch_classes = notes.len(), "no chord shape matched");
                ChordResult::unresolved(Some(bass), self.spelling)
            }
        }
    }

    fn assemble(&self, found: MatchCandidate, bass: PitchClass) -> ChordResult {
        ChordResult {
            root: Some(found.root),
            bass: Some(bass),
            suffix: found.suffix,
            is_slash_chord: self.use_slash && found.root != bass,
            spelling: self.spelling,
        }
    }
}

impl Default for ChordDetector {
    fn default() -> Self {
        ChordDetector::new()
    }
}
