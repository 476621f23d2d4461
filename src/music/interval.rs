// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Functional degrees and their semitone offsets.
//!
//! A degree is the harmonic role a note plays inside a pattern ("1" for
//! the root, "b3" for a minor third, and so on). Enharmonic spellings
//! like b4/3 or #4/b5 are distinct degrees with equal offsets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::Semitones;

/// Functional degree labels used by the pattern catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Degree {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "b2")]
    FlatTwo,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "b3")]
    FlatThree,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "b4")]
    FlatFour,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "#4")]
    SharpFour,
    #[serde(rename = "b5")]
    FlatFive,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "#5")]
    SharpFive,
    #[serde(rename = "b6")]
    FlatSix,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "b7")]
    FlatSeven,
    #[serde(rename = "7")]
    Seven,
}

impl Degree {
    /// All degrees in ascending offset order
    pub const ALL: [Degree; 15] = [
        Degree::One,
        Degree::FlatTwo,
        Degree::Two,
        Degree::FlatThree,
        Degree::Three,
        Degree::FlatFour,
        Degree::Four,
        Degree::SharpFour,
        Degree::FlatFive,
        Degree::Five,
        Degree::SharpFive,
        Degree::FlatSix,
        Degree::Six,
        Degree::FlatSeven,
        Degree::Seven,
    ];

    /// Get the semitone offset above the root for this degree
    pub fn semitones(self) -> Semitones {
        match self {
            Degree::One => 0,
            Degree::FlatTwo => 1,
            Degree::Two => 2,
            Degree::FlatThree => 3,
            Degree::Three => 4,
            Degree::FlatFour => 4,
            Degree::Four => 5,
            Degree::SharpFour => 6,
            Degree::FlatFive => 6,
            Degree::Five => 7,
            Degree::SharpFive => 8,
            Degree::FlatSix => 8,
            Degree::Six => 9,
            Degree::FlatSeven => 10,
            Degree::Seven => 11,
        }
    }

    /// Get the label for this degree (e.g., "1", "b3", "#5")
    pub fn label(self) -> &'static str {
        match self {
            Degree::One => "1",
            Degree::FlatTwo => "b2",
            Degree::Two => "2",
            Degree::FlatThree => "b3",
            Degree::Three => "3",
            Degree::FlatFour => "b4",
            Degree::Four => "4",
            Degree::SharpFour => "#4",
            Degree::FlatFive => "b5",
            Degree::Five => "5",
            Degree::SharpFive => "#5",
            Degree::FlatSix => "b6",
            Degree::Six => "6",
            Degree::FlatSeven => "b7",
            Degree::Seven => "7",
        }
    }

    /// Parse a degree from its label
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Degree::ALL.iter().copied().find(|d| d.label() == s)
    }

    /// Whether this degree is the root of its pattern
    pub fn is_root(self) -> bool {
        self == Degree::One
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
