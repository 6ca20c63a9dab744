//! Pitch classes
//!
//! Reduces raw MIDI note numbers to the twelve semitone classes and spells
//! them with sharps or flats.

use std::{fmt::Display, str::FromStr};

use crate::chord_detector::ChordError;

/// Number of distinct pitch classes in twelve-tone equal temperament.
pub const SEMITONES: usize = 12;

/// Highest valid MIDI note number.
const MAX_NOTE: i32 = 127;

const NOTE_NAMES_SHARP: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const NOTE_NAMES_FLAT: [&str; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// How accidentals are spelled when naming a pitch class.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spelling {
    /// C#, D#, F#, G#, A#
    #[default]
    Sharp,
    /// Db, Eb, Gb, Ab, Bb
    Flat,
}

/// Twelve chromatic pitch classes
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchClass {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

impl PitchClass {
    /// All pitch classes in ascending order, starting at C.
    pub const ALL: [PitchClass; SEMITONES] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Pitch class of `idx` semitones above C, wrapping at the octave.
    pub const fn from_index(idx: usize) -> PitchClass {
        Self::ALL[idx % SEMITONES]
    }

    /// Pitch class of a MIDI note number, or `None` outside `0..=127`.
    pub const fn from_midi(note: i32) -> Option<PitchClass> {
        if note < 0 || note > MAX_NOTE {
            return None;
        }
        Some(Self::from_index(note as usize))
    }

    /// Semitones above C, in `0..12`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The pitch class `semitones` above this one.
    pub const fn transpose(self, semitones: usize) -> PitchClass {
        Self::from_index(self.index() + semitones)
    }

    /// Upward distance from `self` to `other`, in `0..12`.
    pub const fn interval_to(self, other: PitchClass) -> usize {
        (other.index() + SEMITONES - self.index()) % SEMITONES
    }

    /// Note name under the given spelling.
    pub const fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => NOTE_NAMES_SHARP[self.index()],
            Spelling::Flat => NOTE_NAMES_FLAT[self.index()],
        }
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Spelling::Sharp))
    }
}

impl TryFrom<i32> for PitchClass {
    type Error = ChordError;

    /// Accepts a pitch class index in `0..12`; use [`PitchClass::from_midi`]
    /// for note numbers.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if !(0..SEMITONES as i32).contains(&value) {
            return Err(ChordError::PitchClassOutOfRange(value));
        }
        Ok(Self::from_index(value as usize))
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    /// Parses a letter with an optional `#`/`b` accidental, e.g. `"F#"`, `"Bb"`, `"e"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ChordError::UnknownNoteName(s.to_string());
        let mut chars = s.trim().chars();

        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(unknown()),
        };

        let shift = match (chars.next(), chars.next()) {
            (None, _) => 0,
            (Some('#'), None) => 1,
            (Some('b'), None) => SEMITONES - 1,
            _ => return Err(unknown()),
        };

        Ok(Self::from_index(natural + shift))
    }
}

/// The distinct pitch classes of a chord plus the pitch class of its lowest note.
///
/// Stored as a 12-bit set so extraction never allocates, whatever the input length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NoteSet {
    bits: u16,
    bass: PitchClass,
}

impl NoteSet {
    /// Extract pitch classes from MIDI note numbers.
    ///
    /// Values outside `0..=127` are dropped. The bass is the pitch class of the
    /// numerically lowest remaining note, which is not necessarily the smallest
    /// pitch class. Returns `None` when no valid note remains.
    pub fn from_midi(notes: &[i32]) -> Option<NoteSet> {
        let mut bits = 0u16;
        let mut lowest: Option<i32> = None;

        for &note in notes {
            let Some(pc) = PitchClass::from_midi(note) else {
                continue;
            };
            bits |= 1 << pc.index();
            match lowest {
                Some(low) if low <= note => {}
                _ => lowest = Some(note),
            }
        }

        let bass = PitchClass::from_midi(lowest?)?;
        Some(NoteSet { bits, bass })
    }

    /// Pitch class of the lowest sounding note.
    pub const fn bass(&self) -> PitchClass {
        self.bass
    }

    /// Whether `pc` is sounding.
    pub const fn contains(&self, pc: PitchClass) -> bool {
        self.bits & (1 << pc.index()) != 0
    }

    /// Number of distinct pitch classes, in `1..=12`.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Always `false`; an empty note list never produces a `NoteSet`.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Sounding pitch classes in ascending order from C.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::ALL
            .into_iter()
            .filter(move |&pc| self.contains(pc))
    }
}
