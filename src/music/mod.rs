// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives for the shape engine.
//!
//! This module provides pitch classes, functional degrees, and the
//! static pattern catalog that maps a root and a pattern name to the
//! interval formula the fretboard search traverses.

pub mod interval;
pub mod pattern;
pub mod pitch;

pub use interval::Degree;
pub use pattern::{resolve, PatternType, UnknownPatternError};
pub use pitch::{PitchClass, Semitones};
