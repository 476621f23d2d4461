// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Shape generation for a six-string guitar in standard tuning.
//!
//! This module turns a root and a pattern name into playable fingering
//! shapes: `generate` for scale and arpeggio shapes across the neck,
//! `generate_drop` for drop chord voicings on consecutive strings. Both
//! return the complete flagged set in a deterministic order; shapes
//! that failed filtering stay in the output with their validity flag
//! cleared so callers can inspect them.

mod drops;
mod filter;
mod search;

pub mod finger;
pub mod shape;
pub mod string;

pub use finger::{Finger, Fingering, Fret};
pub use shape::Shape;
pub use string::GuitarString;

use thiserror::Error;
use tracing::debug;

use crate::music::{self, PitchClass, UnknownPatternError};

/// Errors from shape generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The requested pattern is not in the catalog
    #[error(transparent)]
    UnknownPattern(#[from] UnknownPatternError),
    /// The drop number does not fit the chord
    #[error("drop {drop} is not valid for a chord of {size} tones")]
    InvalidDrop { drop: usize, size: usize },
}

/// Generate every shape of a pattern, seeded on the low E string.
///
/// The result is sorted and flagged: redundant or unplayable shapes
/// keep their positions but report `is_valid() == false`.
pub fn generate(root: PitchClass, pattern: &str) -> Result<Vec<Shape>, ShapeError> {
    let (notes, degrees) = music::resolve(root, pattern)?;
    let forest = search::shapes_from(GuitarString::LowE, &notes, degrees);
    let mut shapes: Vec<Shape> = forest.into_iter().map(Shape::with_fingering).collect();
    filter::filter_shapes(&mut shapes);

    debug_assert!(shapes.iter().all(|s| s.span() < 5));
    debug!(
        root = %root,
        pattern,
        shapes = shapes.len(),
        valid = shapes.iter().filter(|s| s.is_valid()).count(),
        "shapes generated"
    );
    Ok(shapes)
}

/// Generate every drop voicing of a chord pattern on the given bass string.
///
/// `drop` counts tones from the top of the close voicing; it must be
/// at least 2 and less than the chord size. The result is sorted and
/// flagged like `generate`, and every valid voicing holds exactly one
/// position per chord tone on consecutive ascending strings.
pub fn generate_drop(
    root: PitchClass,
    pattern: &str,
    drop: usize,
    bass: GuitarString,
) -> Result<Vec<Shape>, ShapeError> {
    let (notes, degrees) = music::resolve(root, pattern)?;
    let size = notes.len();
    if drop <= 1 || drop >= size {
        return Err(ShapeError::InvalidDrop { drop, size });
    }

    let voicings = drops::drop_voicings(&notes, degrees, drop, bass);

    debug_assert!(voicings
        .iter()
        .filter(|s| s.is_valid())
        .all(|s| s.len() == size && s.span() <= 3 && s.min_fret() >= 1));
    debug!(
        root = %root,
        pattern,
        drop,
        bass = %bass,
        voicings = voicings.len(),
        valid = voicings.iter().filter(|s| s.is_valid()).count(),
        "drop voicings generated"
    );
    Ok(voicings)
}
