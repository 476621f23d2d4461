// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretwork generates fingering shapes for six-string guitar in
//! standard tuning.
//!
//! Given a root pitch class and a pattern name from the built-in
//! catalog, [`generate`] walks the fretboard and returns every playable
//! shape for that scale, chord, or arpeggio, sorted and flagged.
//! [`generate_drop`] builds drop voicings of a chord instead. The
//! [`render`] module turns shapes into text diagrams, and [`song`]
//! batches all of it for the chords and scales of a whole tune.

pub mod config;
pub mod fretboard;
pub mod music;
pub mod render;
pub mod song;

pub use fretboard::{
    generate, generate_drop, Finger, Fingering, Fret, GuitarString, Shape, ShapeError,
};
pub use music::{resolve, Degree, PatternType, PitchClass, Semitones, UnknownPatternError};
pub use render::{Diagram, LabelMode};
pub use song::Song;
