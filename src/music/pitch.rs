// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes for roots and note naming.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semitone offset type
pub type Semitones = u8;

/// The twelve pitch classes (C = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#", alias = "Db")]
    Cs,
    D,
    #[serde(rename = "D#", alias = "Eb")]
    Ds,
    E,
    F,
    #[serde(rename = "F#", alias = "Gb")]
    Fs,
    G,
    #[serde(rename = "G#", alias = "Ab")]
    Gs,
    A,
    #[serde(rename = "A#", alias = "Bb")]
    As,
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order
    pub const ALL: [PitchClass; 12] = [
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

    /// Get the semitone value (0-11) for this pitch class
    pub fn semitone(self) -> Semitones {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Get pitch class from a semitone value
    pub fn from_semitone(s: Semitones) -> Self {
        PitchClass::ALL[(s % 12) as usize]
    }

    /// Parse a pitch class from string (e.g., "C", "C#", "Db", "F#")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" => Some(PitchClass::C),
            "C#" | "CS" | "DB" => Some(PitchClass::Cs),
            "D" => Some(PitchClass::D),
            "D#" | "DS" | "EB" => Some(PitchClass::Ds),
            "E" | "FB" => Some(PitchClass::E),
            "F" | "E#" | "ES" => Some(PitchClass::F),
            "F#" | "FS" | "GB" => Some(PitchClass::Fs),
            "G" => Some(PitchClass::G),
            "G#" | "GS" | "AB" => Some(PitchClass::Gs),
            "A" => Some(PitchClass::A),
            "A#" | "AS" | "BB" => Some(PitchClass::As),
            "B" | "CB" => Some(PitchClass::B),
            _ => None,
        }
    }

    /// Get the canonical (sharp) name for this pitch class
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Transpose by semitones (wrapping within the octave)
    pub fn transpose(self, semitones: Semitones) -> Self {
        PitchClass::from_semitone(self.semitone() + semitones)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitone_values() {
        assert_eq!(PitchClass::C.semitone(), 0);
        assert_eq!(PitchClass::D.semitone(), 2);
        assert_eq!(PitchClass::A.semitone(), 9);
        assert_eq!(PitchClass::B.semitone(), 11);
    }

    #[test]
    fn test_from_semitone() {
        assert_eq!(PitchClass::from_semitone(0), PitchClass::C);
        assert_eq!(PitchClass::from_semitone(6), PitchClass::Fs);
        assert_eq!(PitchClass::from_semitone(12), PitchClass::C);
        assert_eq!(PitchClass::from_semitone(14), PitchClass::D);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(PitchClass::from_str("C"), Some(PitchClass::C));
        assert_eq!(PitchClass::from_str("c#"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_str("Db"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_str("Bb"), Some(PitchClass::As));
        assert_eq!(PitchClass::from_str(" F# "), Some(PitchClass::Fs));
        assert_eq!(PitchClass::from_str("H"), None);
    }

    #[test]
    fn test_transpose() {
        assert_eq!(PitchClass::C.transpose(7), PitchClass::G);
        assert_eq!(PitchClass::A.transpose(3), PitchClass::C);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
    }

    #[test]
    fn test_yaml_names() {
        let parsed: PitchClass = serde_yaml::from_str("\"C#\"").unwrap();
        assert_eq!(parsed, PitchClass::Cs);
        let parsed: PitchClass = serde_yaml::from_str("\"Eb\"").unwrap();
        assert_eq!(parsed, PitchClass::Ds);
        let out = serde_yaml::to_string(&PitchClass::Fs).unwrap();
        assert_eq!(out.trim(), "F#");
    }
}
