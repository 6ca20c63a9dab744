//! Detailed analysis
//!
//! A chord together with its inversion and the individual notes that form it.
//! Meant for display and debugging rather than the real-time path.

use crate::{
    chord_detector::{ChordDetector, ChordResult, Inversion},
    pitch::NoteSet,
};

/// A chord broken down into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetailedAnalysis {
    /// The identified chord, always with slash notation.
    pub chord: ChordResult,
    /// Which chord member is in the bass, `None` when unresolved.
    pub inversion: Option<Inversion>,
    /// Names of the distinct sounding pitch classes, ascending from C.
    pub note_names: Vec<&'static str>,
    /// Distance of each sounding pitch class above the root, in the same
    /// order as `note_names`. Empty when unresolved.
    pub intervals_from_root: Vec<usize>,
}

impl ChordDetector {
    /// Analyze `notes` with slash notation enabled and list their parts.
    pub fn detailed_analysis(&self, notes: &[i32]) -> DetailedAnalysis {
        let detector = ChordDetector::builder()
            .spelling(self.spelling())
            .use_slash(true)
            .build();
        let chord = detector.analyze(notes);

        let Some(set) = NoteSet::from_midi(notes) else {
            return DetailedAnalysis {
                chord,
                inversion: None,
                note_names: Vec::new(),
                intervals_from_root: Vec::new(),
            };
        };

        let note_names = set.iter().map(|pc| pc.name(self.spelling())).collect();
        let intervals_from_root = match chord.root {
            Some(root) => set.iter().map(|pc| root.interval_to(pc)).collect(),
            None => Vec::new(),
        };

        DetailedAnalysis {
            chord,
            inversion: chord.inversion(),
            note_names,
            intervals_from_root,
        }
    }
}
