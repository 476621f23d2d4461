// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Recursive traversal of the fretboard.
//!
//! The search enumerates every position of a note set, seeds one shape
//! per position on the designated bass string, and grows each shape by
//! walking the pattern's degrees cyclically. A step is accepted when it
//! rises by less than an octave, stays within reach of the previous
//! fret, keeps the shape span under five frets, and does not touch an
//! open string. Branch state is passed by value, so every candidate
//! spawns an independent copy of the shape.

use tracing::trace;

use crate::music::{Degree, Semitones};

use super::finger::{Finger, Fret};
use super::shape::Shape;
use super::string::GuitarString;

/// Largest fret span a shape may cover (exclusive)
const FRET_SPAN: Fret = 5;

/// Largest fret movement between consecutive positions (exclusive)
const FRET_REACH: Fret = 5;

/// Semitones in an octave; each step must rise by less than this
const OCTAVE: i32 = 12;

/// Positions below this fret are doubled an octave up the same string
const DOUBLE_BELOW: Fret = 5;

/// Enumerate every playable position of the given notes.
///
/// Notes and degrees are positionally aligned. Low positions get a
/// second entry twelve frets up, giving the search an alternative
/// fingering of the same pitch class higher on the neck.
pub(crate) fn positions_for(notes: &[Semitones], degrees: &[Degree]) -> Vec<Finger> {
    let mut positions = Vec::with_capacity(notes.len() * GuitarString::ALL.len() * 2);
    for (&note, &degree) in notes.iter().zip(degrees.iter()) {
        for string in GuitarString::ALL {
            let fret = (note + 12 - string.open_pitch_class().semitone()) % 12;
            positions.push(Finger::new(note, degree, string, fret));
            if fret < DOUBLE_BELOW {
                positions.push(Finger::new(note, degree, string, fret + 12));
            }
        }
    }
    positions
}

/// Build the raw shape forest for one bass string.
///
/// Every position on the bass string seeds a traversal, whatever degree
/// it carries; the walk resumes the pattern at the degree after the
/// seed's.
pub(crate) fn shapes_from(
    bass: GuitarString,
    notes: &[Semitones],
    degrees: &[Degree],
) -> Vec<Shape> {
    let positions = positions_for(notes, degrees);
    let mut forest = Vec::new();

    for seed in positions.iter().filter(|f| f.string == bass) {
        let start = match degrees.iter().position(|&d| d == seed.degree) {
            Some(i) => (i + 1) % degrees.len(),
            None => continue,
        };
        let before = forest.len();
        fill(
            &mut forest,
            Shape::new(*seed),
            degrees,
            start,
            &positions,
            seed.fret,
            seed.fret,
        );
        trace!(seed = %seed, recorded = forest.len() - before, "seed explored");
    }

    forest
}

/// Grow `shape` with every acceptable position of the next degree.
///
/// A shape is recorded when no position continues it, or when a span
/// violation halts a branch whose latest position already reached the
/// top string.
fn fill(
    forest: &mut Vec<Shape>,
    shape: Shape,
    degrees: &[Degree],
    pointer: usize,
    positions: &[Finger],
    min_fret: Fret,
    max_fret: Fret,
) {
    let last = shape.last();
    let candidates: Vec<Finger> = positions
        .iter()
        .filter(|f| {
            let interval = f.interval_from(&last);
            f.degree == degrees[pointer]
                && interval > 0
                && interval < OCTAVE
                && f.fret_distance(&last) < FRET_REACH
        })
        .copied()
        .collect();

    if candidates.is_empty() {
        forest.push(shape);
        return;
    }

    for finger in candidates {
        let new_min = min_fret.min(finger.fret);
        let new_max = max_fret.max(finger.fret);
        if new_max - new_min < FRET_SPAN && new_min > 0 {
            fill(
                forest,
                shape.extended(finger),
                degrees,
                (pointer + 1) % degrees.len(),
                positions,
                new_min,
                new_max,
            );
        } else if last.string == GuitarString::HighE {
            forest.push(shape.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{resolve, PitchClass};

    fn d_minor_seven() -> (Vec<Semitones>, &'static [Degree]) {
        resolve(PitchClass::D, "-7").unwrap()
    }

    #[test]
    fn test_position_enumeration_counts() {
        let (notes, degrees) = d_minor_seven();
        let positions = positions_for(&notes, &degrees);
        // 24 natural positions (4 notes x 6 strings), doubled where the fret is low
        assert_eq!(positions.len(), 33);
        assert!(positions.iter().all(|f| f.fret <= 16));
    }

    #[test]
    fn test_low_positions_are_doubled() {
        let (notes, degrees) = d_minor_seven();
        let positions = positions_for(&notes, &degrees);
        // Open D string is doubled at fret 12
        assert!(positions
            .iter()
            .any(|f| f.string == GuitarString::D && f.fret == 0));
        assert!(positions
            .iter()
            .any(|f| f.string == GuitarString::D && f.fret == 12));
        // Fret 10 on the low E string is not doubled
        assert!(!positions
            .iter()
            .any(|f| f.string == GuitarString::LowE && f.fret == 22));
    }

    #[test]
    fn test_seeds_cover_every_bass_position() {
        let (notes, degrees) = d_minor_seven();
        let positions = positions_for(&notes, &degrees);
        let bass_positions = positions
            .iter()
            .filter(|f| f.string == GuitarString::LowE)
            .count();
        assert_eq!(bass_positions, 5); // F1, F13, A5, C8, D10

        let forest = shapes_from(GuitarString::LowE, &notes, degrees);
        assert!(!forest.is_empty());
        assert!(forest
            .iter()
            .all(|s| s.first().string == GuitarString::LowE));
    }

    #[test]
    fn test_every_shape_respects_span() {
        let (notes, degrees) = d_minor_seven();
        for shape in shapes_from(GuitarString::LowE, &notes, degrees) {
            assert!(shape.span() < FRET_SPAN, "span {} in {}", shape.span(), shape);
        }
    }

    #[test]
    fn test_steps_rise_within_an_octave() {
        let (notes, degrees) = d_minor_seven();
        for shape in shapes_from(GuitarString::LowE, &notes, degrees) {
            for pair in shape.fingers().windows(2) {
                let interval = pair[1].interval_from(&pair[0]);
                assert!(interval > 0 && interval < OCTAVE, "step {} in {}", interval, shape);
                assert!(pair[1].fret_distance(&pair[0]) < FRET_REACH);
            }
        }
    }

    #[test]
    fn test_open_strings_only_as_seeds() {
        let (notes, degrees) = d_minor_seven();
        for shape in shapes_from(GuitarString::LowE, &notes, degrees) {
            for f in &shape.fingers()[1..] {
                assert!(f.fret > 0, "open string mid-shape in {}", shape);
            }
        }
    }

    #[test]
    fn test_degrees_follow_pattern_cycle() {
        let (notes, degrees) = d_minor_seven();
        for shape in shapes_from(GuitarString::LowE, &notes, degrees) {
            let start = degrees
                .iter()
                .position(|&d| d == shape.first().degree)
                .unwrap();
            for (i, f) in shape.fingers().iter().enumerate() {
                assert_eq!(f.degree, degrees[(start + i) % degrees.len()]);
            }
        }
    }

    #[test]
    fn test_raw_forest_contains_fret_ten_run() {
        let (notes, degrees) = d_minor_seven();
        let forest = shapes_from(GuitarString::LowE, &notes, degrees);
        let expected = [
            (GuitarString::LowE, 10),
            (GuitarString::A, 8),
            (GuitarString::D, 7),
            (GuitarString::D, 10),
            (GuitarString::G, 7),
            (GuitarString::G, 10),
            (GuitarString::B, 10),
            (GuitarString::HighE, 8),
            (GuitarString::HighE, 10),
        ];
        assert!(forest.iter().any(|s| {
            s.len() == expected.len()
                && s.fingers()
                    .iter()
                    .zip(expected.iter())
                    .all(|(f, &(string, fret))| f.string == string && f.fret == fret)
        }));
    }
}
