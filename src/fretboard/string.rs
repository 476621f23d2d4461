// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The six strings of a standard-tuned guitar.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::music::{PitchClass, Semitones};

/// One guitar string in standard tuning (E A D G B e, low to high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GuitarString {
    #[serde(rename = "E")]
    LowE,
    A,
    D,
    G,
    B,
    #[serde(rename = "e")]
    HighE,
}

impl GuitarString {
    /// All strings from lowest to highest pitch
    pub const ALL: [GuitarString; 6] = [
        GuitarString::LowE,
        GuitarString::A,
        GuitarString::D,
        GuitarString::G,
        GuitarString::B,
        GuitarString::HighE,
    ];

    /// Get the open pitch class of this string
    pub fn open_pitch_class(self) -> PitchClass {
        match self {
            GuitarString::LowE => PitchClass::E,
            GuitarString::A => PitchClass::A,
            GuitarString::D => PitchClass::D,
            GuitarString::G => PitchClass::G,
            GuitarString::B => PitchClass::B,
            GuitarString::HighE => PitchClass::E,
        }
    }

    /// Get the open pitch in semitones above the open low E string
    pub fn pitch_offset(self) -> Semitones {
        match self {
            GuitarString::LowE => 0,
            GuitarString::A => 5,
            GuitarString::D => 10,
            GuitarString::G => 15,
            GuitarString::B => 19,
            GuitarString::HighE => 24,
        }
    }

    /// Get the bass-to-treble index of this string (low E = 0)
    pub fn index(self) -> usize {
        match self {
            GuitarString::LowE => 0,
            GuitarString::A => 1,
            GuitarString::D => 2,
            GuitarString::G => 3,
            GuitarString::B => 4,
            GuitarString::HighE => 5,
        }
    }

    /// Parse a string name. Case matters: "E" is the low string, "e" the high one.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "E" => Some(GuitarString::LowE),
            "A" => Some(GuitarString::A),
            "D" => Some(GuitarString::D),
            "G" => Some(GuitarString::G),
            "B" => Some(GuitarString::B),
            "e" => Some(GuitarString::HighE),
            _ => None,
        }
    }

    /// Get the display name of this string
    pub fn name(self) -> &'static str {
        match self {
            GuitarString::LowE => "E",
            GuitarString::A => "A",
            GuitarString::D => "D",
            GuitarString::G => "G",
            GuitarString::B => "B",
            GuitarString::HighE => "e",
        }
    }
}

impl fmt::Display for GuitarString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
