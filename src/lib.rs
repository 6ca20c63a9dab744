//! # midi_chord_detector
//!
//! Name the chord formed by a set of MIDI notes, fast enough to call from an
//! audio or MIDI callback: no allocation, no locking, no state between calls.
//!
//! ## Example
//! ```rust
//! use midi_chord_detector::{ChordDetector, Inversion};
//!
//! // Plain names: inversions are reported by their root.
//! let detector = ChordDetector::new();
//! assert_eq!(detector.analyze(&[64, 67, 72]).full_name(), "C");
//!
//! // Slash notation and flat spelling.
//! let detector = ChordDetector::builder()
//!     .use_flats(true)
//!     .use_slash(true)
//!     .build();
//! let chord = detector.analyze(&[70, 73, 76, 78]);
//! assert_eq!(chord.full_name(), "Gb7/Bb");
//! assert_eq!(chord.chord_name(), "Gb7");
//! assert_eq!(chord.inversion(), Some(Inversion::First));
//!
//! // Notes that fit no known shape stay unresolved.
//! assert!(!detector.analyze(&[60, 61, 62]).is_resolved());
//! ```
//!
//! ## Features
//! - `serde`: derives `Serialize`/`Deserialize` for detector options and
//!   `Serialize` for results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// High‐level chord detector API.
pub use chord_detector::{ChordDetector, ChordDetectorBuilder, ChordError, ChordResult, Inversion};

/// Note breakdown of a chord.
pub use analysis::DetailedAnalysis;

/// Pitch class extraction and spelling.
pub use pitch::{NoteSet, PitchClass, Spelling};

/// Interval signatures.
pub use interval::{IntervalMask, RootMode};

/// Chord detection module.
pub mod chord_detector;

/// Detailed analysis module.
pub mod analysis;

/// Pitch class module.
pub mod pitch;

/// Interval mask module.
pub mod interval;

/// Chord pattern catalog.
pub mod patterns;

mod selector;
mod slash;
