//! Scale definitions: a root pitch class plus an ascending interval set

use super::pitch::PitchClass;
use crate::error::TabError;
use serde::{Deserialize, Serialize};

/// A scale rooted at a pitch class
///
/// Intervals are semitone offsets from the root, strictly ascending,
/// starting at 0 and staying below 12.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Scale {
    pub root: PitchClass,
    pub intervals: Vec<u8>,
}

impl Scale {
    /// Validate and build a scale
    pub fn new(root: PitchClass, intervals: &[u8]) -> Result<Scale, TabError> {
        if intervals.is_empty() {
            return Err(TabError::InvalidScale("interval set is empty".into()));
        }
        if intervals[0] != 0 {
            return Err(TabError::InvalidScale(format!(
                "first interval must be 0, got {}",
                intervals[0]
            )));
        }
        for pair in intervals.windows(2) {
            if pair[1] <= pair[0] {
                return Err(TabError::InvalidScale(format!(
                    "intervals must ascend strictly ({} then {})",
                    pair[0], pair[1]
                )));
            }
        }
        if let Some(&last) = intervals.last() {
            if last > 11 {
                return Err(TabError::InvalidScale(format!(
                    "interval {} exceeds the octave",
                    last
                )));
            }
        }
        Ok(Scale {
            root,
            intervals: intervals.to_vec(),
        })
    }

    /// The pitch classes of the scale, root first
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let root_index = self.root.chromatic_index() as i32;
        self.intervals
            .iter()
            .map(|&i| PitchClass::from_index(root_index + i as i32))
            .collect()
    }

    /// Whether a pitch class belongs to the scale
    pub fn contains(&self, class: PitchClass) -> bool {
        let offset =
            (class.chromatic_index() as i32 - self.root.chromatic_index() as i32).rem_euclid(12);
        self.intervals.contains(&(offset as u8))
    }

    /// Chord tones of the scale's I chord: degrees 1, 3, 5 when present
    pub fn chord_tones(&self) -> Vec<PitchClass> {
        let classes = self.pitch_classes();
        [0usize, 2, 4]
            .iter()
            .filter_map(|&degree| classes.get(degree).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAJOR: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn test_c_major_pitch_classes() {
        let scale = Scale::new(PitchClass::C, &MAJOR).unwrap();
        assert_eq!(
            scale.pitch_classes(),
            vec![
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::B
            ]
        );
        assert!(scale.contains(PitchClass::E));
        assert!(!scale.contains(PitchClass::Fs));
    }

    #[test]
    fn test_chord_tones_are_root_third_fifth() {
        let scale = Scale::new(PitchClass::C, &MAJOR).unwrap();
        assert_eq!(
            scale.chord_tones(),
            vec![PitchClass::C, PitchClass::E, PitchClass::G]
        );
    }

    #[test]
    fn test_short_scale_chord_tones_when_present() {
        // Three-note set: only degrees 1 and 3 exist
        let scale = Scale::new(PitchClass::C, &[0, 4, 7]).unwrap();
        assert_eq!(scale.chord_tones(), vec![PitchClass::C, PitchClass::G]);
    }

    #[test]
    fn test_wrapping_root() {
        let scale = Scale::new(PitchClass::B, &MAJOR).unwrap();
        // B major contains C# (offset 2 above B wraps past the octave)
        assert!(scale.contains(PitchClass::Cs));
        assert!(!scale.contains(PitchClass::C));
    }

    #[test]
    fn test_invalid_intervals_rejected() {
        assert!(Scale::new(PitchClass::C, &[]).is_err());
        assert!(Scale::new(PitchClass::C, &[1, 2, 3]).is_err());
        assert!(Scale::new(PitchClass::C, &[0, 4, 4]).is_err());
        assert!(Scale::new(PitchClass::C, &[0, 4, 12]).is_err());
    }
}
