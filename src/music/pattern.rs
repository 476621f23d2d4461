// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The pattern catalog: interval formulas for scales, chords, and arpeggios.
//!
//! Each pattern is an ordered sequence of distinct functional degrees.
//! The order is harmonically meaningful and the shape search walks it
//! cyclically, so "1 b3 5 b7" keeps producing b7 -> 1 -> b3 -> ... as a
//! shape climbs the strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::interval::Degree;
use super::pitch::{PitchClass, Semitones};

use Degree::*;

/// Lookup of a pattern name that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern: {0}")]
pub struct UnknownPatternError(pub String);

/// Named interval patterns supported by the shape engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternType {
    // Triads
    TriadMaj,
    TriadMin,
    TriadAug,
    TriadDim,

    // Seventh chords
    Dom7,
    Min7,
    Maj7,
    Min7b5,
    Dim7,

    // Scales
    Major,
    Minor,
    Pentatonic,
    PentatonicMaj,
    Diminished,
    WholeHalf,

    // Modes
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl PatternType {
    /// All patterns in the catalog
    pub const ALL: [PatternType; 22] = [
        PatternType::TriadMaj,
        PatternType::TriadMin,
        PatternType::TriadAug,
        PatternType::TriadDim,
        PatternType::Dom7,
        PatternType::Min7,
        PatternType::Maj7,
        PatternType::Min7b5,
        PatternType::Dim7,
        PatternType::Major,
        PatternType::Minor,
        PatternType::Pentatonic,
        PatternType::PentatonicMaj,
        PatternType::Diminished,
        PatternType::WholeHalf,
        PatternType::Ionian,
        PatternType::Dorian,
        PatternType::Phrygian,
        PatternType::Lydian,
        PatternType::Mixolydian,
        PatternType::Aeolian,
        PatternType::Locrian,
    ];

    /// Get the degree sequence for this pattern
    pub fn degrees(self) -> &'static [Degree] {
        match self {
            PatternType::TriadMaj => &[One, Three, Five],
            PatternType::TriadMin => &[One, FlatThree, Five],
            PatternType::TriadAug => &[One, Three, SharpFive],
            PatternType::TriadDim => &[One, FlatThree, FlatFive],
            PatternType::Dom7 => &[One, Three, Five, FlatSeven],
            PatternType::Min7 => &[One, FlatThree, Five, FlatSeven],
            PatternType::Maj7 => &[One, Three, Five, Seven],
            PatternType::Min7b5 => &[One, FlatThree, FlatFive, FlatSeven],
            PatternType::Dim7 => &[One, FlatThree, FlatFive, Seven],
            PatternType::Major => &[One, Two, Three, Four, Five, Six, Seven],
            PatternType::Minor => &[One, Two, FlatThree, Four, Five, FlatSix, FlatSeven],
            PatternType::Pentatonic => &[One, FlatThree, Four, Five, FlatSeven],
            PatternType::PentatonicMaj => &[One, Two, Three, Five, Six],
            PatternType::Diminished => {
                &[One, FlatTwo, FlatThree, FlatFour, FlatFive, FlatSix, FlatSeven]
            }
            PatternType::WholeHalf => {
                &[One, Two, FlatThree, FlatFour, FlatFive, FlatSix, FlatSeven]
            }
            PatternType::Ionian => &[One, Two, Three, Four, Five, Six, Seven],
            PatternType::Dorian => &[One, Two, FlatThree, Four, Five, Six, FlatSeven],
            PatternType::Phrygian => {
                &[One, FlatTwo, FlatThree, Four, Five, FlatSix, FlatSeven]
            }
            PatternType::Lydian => &[One, Two, Three, SharpFour, Five, Six, Seven],
            PatternType::Mixolydian => &[One, Two, Three, Four, Five, Six, FlatSeven],
            PatternType::Aeolian => &[One, Two, FlatThree, Four, Five, FlatSix, FlatSeven],
            PatternType::Locrian => {
                &[One, FlatTwo, FlatThree, Four, FlatFive, FlatSix, FlatSeven]
            }
        }
    }

    /// Parse a pattern from its catalog name or a common alias
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "triadmaj" | "maj" => Some(PatternType::TriadMaj),
            "triadmin" | "min" => Some(PatternType::TriadMin),
            "triadaug" | "aug" => Some(PatternType::TriadAug),
            "triaddism" | "triaddim" | "dim" => Some(PatternType::TriadDim),
            "7" | "dom7" => Some(PatternType::Dom7),
            "-7" | "m7" | "min7" => Some(PatternType::Min7),
            "maj7" => Some(PatternType::Maj7),
            "-7b5" | "m7b5" | "halfdim" => Some(PatternType::Min7b5),
            "º7" | "o7" | "dim7" => Some(PatternType::Dim7),
            "major" => Some(PatternType::Major),
            "minor" => Some(PatternType::Minor),
            "pentatonic" | "pentatonicmin" => Some(PatternType::Pentatonic),
            "pentatonicmaj" => Some(PatternType::PentatonicMaj),
            "diminished" => Some(PatternType::Diminished),
            "whole-half" | "wholehalf" => Some(PatternType::WholeHalf),
            "ionian" => Some(PatternType::Ionian),
            "dorian" => Some(PatternType::Dorian),
            "phrygian" => Some(PatternType::Phrygian),
            "lydian" => Some(PatternType::Lydian),
            "mixolydian" => Some(PatternType::Mixolydian),
            "aeolian" => Some(PatternType::Aeolian),
            "locrian" => Some(PatternType::Locrian),
            _ => None,
        }
    }

    /// Get the catalog name for this pattern
    pub fn name(self) -> &'static str {
        match self {
            PatternType::TriadMaj => "TriadMaj",
            PatternType::TriadMin => "TriadMin",
            PatternType::TriadAug => "TriadAug",
            PatternType::TriadDim => "TriadDism",
            PatternType::Dom7 => "7",
            PatternType::Min7 => "-7",
            PatternType::Maj7 => "Maj7",
            PatternType::Min7b5 => "-7b5",
            PatternType::Dim7 => "º7",
            PatternType::Major => "Major",
            PatternType::Minor => "Minor",
            PatternType::Pentatonic => "Pentatonic",
            PatternType::PentatonicMaj => "PentatonicMaj",
            PatternType::Diminished => "Diminished",
            PatternType::WholeHalf => "Whole-half",
            PatternType::Ionian => "Ionian",
            PatternType::Dorian => "Dorian",
            PatternType::Phrygian => "Phrygian",
            PatternType::Lydian => "Lydian",
            PatternType::Mixolydian => "Mixolydian",
            PatternType::Aeolian => "Aeolian",
            PatternType::Locrian => "Locrian",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve a root and pattern name to absolute semitones and degrees.
///
/// The returned semitone sequence is positionally aligned with the
/// degree sequence of the pattern.
pub fn resolve(
    root: PitchClass,
    pattern: &str,
) -> Result<(Vec<Semitones>, &'static [Degree]), UnknownPatternError> {
    let pattern =
        PatternType::from_name(pattern).ok_or_else(|| UnknownPatternError(pattern.to_string()))?;
    let degrees = pattern.degrees();
    let notes = degrees
        .iter()
        .map(|d| root.transpose(d.semitones()).semitone())
        .collect();
    Ok((notes, degrees))
}
