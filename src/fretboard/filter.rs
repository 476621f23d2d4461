// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Deduplication and ranking of the raw shape forest.
//!
//! The raw search records many near-identical traversals. This pass
//! sorts the forest into its presentation order and walks it once,
//! invalidating shapes that are too hard to play or that repeat another
//! shape's positions. Invalidation is monotone; shapes are flagged,
//! never removed, so callers can still inspect what was discarded.

use tracing::debug;

use super::shape::Shape;

/// Shapes with this many positions outside the base position are discarded
const MAX_EXTENSIONS: usize = 4;

/// Flag redundant and unplayable shapes in place.
///
/// Three rules, applied in sort order:
/// 1. a shape with four or more extensions is out;
/// 2. of two shapes that end in the same position and share their whole
///    common tail, the shorter one wins and the longer is out;
/// 3. of two shapes that start in the same position, the one with fewer
///    extensions wins; the earlier one wins a tie.
///
/// Rules 2 and 3 both run for a shape that was valid when the scan
/// reached it, so a shape invalidated mid-visit still eliminates its
/// own later duplicates.
pub(crate) fn filter_shapes(shapes: &mut Vec<Shape>) {
    shapes.sort();

    for i in 0..shapes.len() {
        let extensions = shapes[i].extensions();
        if extensions >= MAX_EXTENSIONS {
            shapes[i].invalidate();
        }
        if !shapes[i].is_valid() {
            continue;
        }

        let last = shapes[i].last();
        let len = shapes[i].len();
        for j in (i + 1)..shapes.len() {
            if !shapes[j].is_valid() || shapes[j].last() != last || shapes[j].len() == len {
                continue;
            }
            let common = len.min(shapes[j].len());
            let same_tail = (1..common).all(|k| {
                shapes[i].fingers()[len - 1 - k] == shapes[j].fingers()[shapes[j].len() - 1 - k]
            });
            if same_tail {
                if shapes[j].len() < len {
                    shapes[i].invalidate();
                } else {
                    shapes[j].invalidate();
                }
            }
        }

        let first = shapes[i].first();
        for j in (i + 1)..shapes.len() {
            if !shapes[j].is_valid() || shapes[j].first() != first {
                continue;
            }
            if shapes[j].extensions() >= extensions {
                shapes[j].invalidate();
            } else {
                shapes[i].invalidate();
            }
        }
    }

    let valid = shapes.iter().filter(|s| s.is_valid()).count();
    debug!(total = shapes.len(), valid, "shape forest filtered");
}
