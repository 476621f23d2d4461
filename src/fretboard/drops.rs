// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Drop voicings: chords re-voiced with one tone moved below the rest.
//!
//! A drop-n voicing takes the n-th tone from the top of a close chord
//! and drops it an octave, making it the new bass. The generator builds
//! the reordered tone sequence for every inversion of the chord, runs
//! the regular shape search seeded on the requested bass string, and
//! then applies a stricter filter than scale shapes get: one tone per
//! string, consecutive ascending strings, a three-fret span, and no
//! open strings.

use tracing::{debug, trace};

use crate::music::{Degree, Semitones};

use super::finger::Fret;
use super::search;
use super::shape::Shape;
use super::string::GuitarString;

/// Largest fret span a drop voicing may cover (inclusive)
const DROP_SPAN: Fret = 3;

/// Build every drop voicing of a chord on the given bass string.
///
/// The caller has already validated `drop` against the chord size.
pub(crate) fn drop_voicings(
    notes: &[Semitones],
    degrees: &[Degree],
    drop: usize,
    bass: GuitarString,
) -> Vec<Shape> {
    let size = notes.len();
    let mut voicings = Vec::new();

    for inversion in 0..size {
        let (drop_notes, drop_degrees) = reorder(notes, degrees, inversion, drop);
        let mut forest = search::shapes_from(bass, &drop_notes, &drop_degrees);
        trace!(inversion, candidates = forest.len(), "inversion searched");
        voicings.append(&mut forest);
    }

    let mut voicings: Vec<Shape> = voicings.into_iter().map(Shape::with_fingering).collect();
    filter_drops(&mut voicings, size);
    voicings.sort();

    let valid = voicings.iter().filter(|s| s.is_valid()).count();
    debug!(total = voicings.len(), valid, "drop voicings filtered");
    voicings
}

/// Rotate the chord to an inversion, then move the dropped tone to the
/// front so the search starts from the relocated bass.
fn reorder(
    notes: &[Semitones],
    degrees: &[Degree],
    inversion: usize,
    drop: usize,
) -> (Vec<Semitones>, Vec<Degree>) {
    let size = notes.len();
    let pivot = size - drop;

    let rotated = |i: usize| (inversion + i) % size;
    let mut out_notes = Vec::with_capacity(size);
    let mut out_degrees = Vec::with_capacity(size);

    out_notes.push(notes[rotated(pivot)]);
    out_degrees.push(degrees[rotated(pivot)]);
    for i in (0..size).filter(|&i| i != pivot) {
        out_notes.push(notes[rotated(i)]);
        out_degrees.push(degrees[rotated(i)]);
    }
    (out_notes, out_degrees)
}

/// Flag voicings that break the drop constraints.
///
/// Span and open-string checks look at the whole traversal; oversized
/// traversals are then cut down to the chord size before the per-string
/// checks, so excess branch growth does not disqualify an otherwise
/// playable voicing.
pub(crate) fn filter_drops(shapes: &mut [Shape], size: usize) {
    for shape in shapes.iter_mut() {
        if !shape.is_valid() {
            continue;
        }
        if shape.span() > DROP_SPAN {
            shape.invalidate();
        }
        if shape.min_fret() == 0 {
            shape.invalidate();
        }
        if shape.len() < size {
            shape.invalidate();
        } else if shape.len() > size {
            shape.truncate(size);
        }

        let fingers = shape.fingers();
        let mut reused = false;
        for (i, a) in fingers.iter().enumerate() {
            for b in &fingers[i + 1..] {
                if a.string == b.string {
                    reused = true;
                }
            }
        }
        let mut gap = false;
        for pair in fingers.windows(2) {
            if pair[1].string.index() != pair[0].string.index() + 1 {
                gap = true;
            }
        }
        if reused {
            shape.invalidate();
        }
        if gap {
            shape.invalidate();
        }
    }
}
