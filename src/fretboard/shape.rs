// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! An ordered run of positions forming one playable fingering.
//!
//! Shapes grow by copy-on-extend during the search (each branch owns its
//! own value) and are never mutated structurally afterwards except for
//! the drop generator's truncation. Equality and ordering compare the
//! position sequence only; the validity flag is bookkeeping for the
//! filter passes and does not affect identity.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::finger::{Finger, Fingering, Fret};

/// A position counts as an extension when it sits this far or farther
/// above the shape's lowest fret (outside the four-fret base position).
const EXTENSION_REACH: Fret = 4;

/// An ordered sequence of fretted positions. Always holds at least its seed.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    fingers: Vec<Finger>,
    valid: bool,
}

impl Shape {
    /// Create a shape from its seed position
    pub fn new(seed: Finger) -> Self {
        Self {
            fingers: vec![seed],
            valid: true,
        }
    }

    /// Copy this shape with one more position appended
    pub fn extended(&self, finger: Finger) -> Self {
        let mut fingers = Vec::with_capacity(self.fingers.len() + 1);
        fingers.extend_from_slice(&self.fingers);
        fingers.push(finger);
        Self {
            fingers,
            valid: self.valid,
        }
    }

    /// The positions of this shape in playing order (bass first)
    pub fn fingers(&self) -> &[Finger] {
        &self.fingers
    }

    /// The seed position
    pub fn first(&self) -> Finger {
        self.fingers[0]
    }

    /// The most recently added position
    pub fn last(&self) -> Finger {
        self.fingers[self.fingers.len() - 1]
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    /// Whether the shape has no positions (never true for built shapes)
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    /// Lowest fret used by any position
    pub fn min_fret(&self) -> Fret {
        self.fingers.iter().map(|f| f.fret).min().unwrap_or(0)
    }

    /// Highest fret used by any position
    pub fn max_fret(&self) -> Fret {
        self.fingers.iter().map(|f| f.fret).max().unwrap_or(0)
    }

    /// Fret span of the shape
    pub fn span(&self) -> Fret {
        self.max_fret() - self.min_fret()
    }

    /// Number of positions lying outside the four-fret base position
    pub fn extensions(&self) -> usize {
        let min = self.min_fret();
        self.fingers
            .iter()
            .filter(|f| f.fret - min >= EXTENSION_REACH)
            .count()
    }

    /// Assign a finger to every position from its offset above the lowest fret
    pub fn with_fingering(mut self) -> Self {
        let min = self.min_fret();
        for f in &mut self.fingers {
            f.fingering = Some(match f.fret - min {
                0 => Fingering::Index,
                1 => Fingering::Middle,
                2 => Fingering::Ring,
                _ => Fingering::Pinky,
            });
        }
        self
    }

    /// Whether the shape survived filtering
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Mark the shape as filtered out
    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Drop every position past the first `len`
    pub(crate) fn truncate(&mut self, len: usize) {
        self.fingers.truncate(len);
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.fingers == other.fingers
    }
}

impl Eq for Shape {}

impl Ord for Shape {
    /// Total order used for presentation and the filter scan: lowest
    /// fret first, then fewer positions, then bass-most seed string,
    /// then the position sequences lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        let seed = |s: &Shape| s.fingers.first().map(|f| f.string.index()).unwrap_or(0);
        self.min_fret()
            .cmp(&other.min_fret())
            .then(self.fingers.len().cmp(&other.fingers.len()))
            .then(seed(self).cmp(&seed(other)))
            .then_with(|| self.fingers.cmp(&other.fingers))
    }
}

impl PartialOrd for Shape {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.fingers.iter().map(|p| p.to_string()).collect();
        write!(f, "[{}]", positions.join(", "))
    }
}
