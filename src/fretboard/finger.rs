// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A single fretted position and its harmonic role.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::music::{Degree, Semitones};

use super::string::GuitarString;

/// Fret number type
pub type Fret = u8;

/// Left-hand finger assignment within a shape's base position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fingering {
    #[serde(rename = "1")]
    Index,
    #[serde(rename = "2")]
    Middle,
    #[serde(rename = "3")]
    Ring,
    #[serde(rename = "4")]
    Pinky,
}

impl Fingering {
    /// Get the common numeric label for this finger
    pub fn label(self) -> &'static str {
        match self {
            Fingering::Index => "1",
            Fingering::Middle => "2",
            Fingering::Ring => "3",
            Fingering::Pinky => "4",
        }
    }
}

impl fmt::Display for Fingering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One concrete position on the fretboard: a note with its harmonic role.
///
/// Identity and ordering look only at where the position sits and what
/// degree it carries. The fingering annotation is presentation metadata
/// assigned after a shape is complete and takes no part in comparisons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Finger {
    /// Semitone (0-11) of the sounding note
    pub semitone: Semitones,
    /// Harmonic role of the note within its pattern
    pub degree: Degree,
    /// String the note is fretted on
    pub string: GuitarString,
    /// Fret number (0 = open string)
    pub fret: Fret,
    /// Assigned finger, if fingering has been resolved
    pub fingering: Option<Fingering>,
}

impl Finger {
    /// Create an unassigned position
    pub fn new(semitone: Semitones, degree: Degree, string: GuitarString, fret: Fret) -> Self {
        Self {
            semitone,
            degree,
            string,
            fret,
            fingering: None,
        }
    }

    /// Absolute pitch in semitones above the open low E string
    pub fn pitch(&self) -> i32 {
        self.string.pitch_offset() as i32 + self.fret as i32
    }

    /// Signed pitch interval from another position to this one
    pub fn interval_from(&self, other: &Finger) -> i32 {
        self.pitch() - other.pitch()
    }

    /// Absolute fret distance to another position
    pub fn fret_distance(&self, other: &Finger) -> Fret {
        self.fret.abs_diff(other.fret)
    }
}

impl PartialEq for Finger {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string && self.fret == other.fret && self.degree == other.degree
    }
}

impl Eq for Finger {}

impl Ord for Finger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.string
            .index()
            .cmp(&other.string.index())
            .then(self.fret.cmp(&other.fret))
            .then(self.degree.cmp(&other.degree))
    }
}

impl PartialOrd for Finger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.string, self.fret, self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(string: GuitarString, fret: Fret) -> Finger {
        let semitone = (string.open_pitch_class().semitone() + fret) % 12;
        Finger::new(semitone, Degree::One, string, fret)
    }

    #[test]
    fn test_pitch_accounts_for_tuning() {
        assert_eq!(pos(GuitarString::LowE, 0).pitch(), 0);
        assert_eq!(pos(GuitarString::LowE, 5).pitch(), 5);
        assert_eq!(pos(GuitarString::A, 0).pitch(), 5);
        assert_eq!(pos(GuitarString::B, 3).pitch(), 22);
        assert_eq!(pos(GuitarString::HighE, 12).pitch(), 36);
    }

    #[test]
    fn test_same_pitch_on_different_strings() {
        // Fret 5 always sounds the next string's open pitch (except G to B)
        assert_eq!(
            pos(GuitarString::LowE, 5).pitch(),
            pos(GuitarString::A, 0).pitch()
        );
        assert_eq!(
            pos(GuitarString::G, 4).pitch(),
            pos(GuitarString::B, 0).pitch()
        );
    }

    #[test]
    fn test_interval_is_signed() {
        let low = pos(GuitarString::A, 3);
        let high = pos(GuitarString::D, 5);
        assert_eq!(high.interval_from(&low), 7);
        assert_eq!(low.interval_from(&high), -7);
    }

    #[test]
    fn test_fret_distance() {
        let a = pos(GuitarString::A, 3);
        let b = pos(GuitarString::G, 7);
        assert_eq!(a.fret_distance(&b), 4);
        assert_eq!(b.fret_distance(&a), 4);
    }

    #[test]
    fn test_identity_ignores_fingering() {
        let mut a = pos(GuitarString::D, 7);
        let mut b = a;
        a.fingering = Some(Fingering::Index);
        b.fingering = Some(Fingering::Pinky);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering_bass_first() {
        let on_e = pos(GuitarString::LowE, 10);
        let on_a = pos(GuitarString::A, 2);
        assert!(on_e < on_a);
        assert!(pos(GuitarString::D, 3) < pos(GuitarString::D, 9));
    }
}
