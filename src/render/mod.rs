// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Text fretboard diagrams.
//!
//! Renders a shape into a terminal-friendly diagram, horizontally
//! (strings as rows, high e on top) or vertically (strings as columns,
//! low E on the left). The drawn window starts at the shape's lowest
//! fret and is at least `min_frets` wide; position markers show the
//! root distinctly, or carry a degree, finger, or note-name label.
//! Rendering never mutates or filters shapes.

use serde::{Deserialize, Serialize};

use crate::fretboard::{Finger, Fret, GuitarString, Shape};

/// Note names indexed by semitone, spelled the way chord charts usually are
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "G#", "A", "Bb", "B",
];

/// Frets that carry an inlay dot on a standard neck
const MARKER_FRETS: [Fret; 7] = [3, 5, 7, 9, 12, 15, 17];

/// Width of one fret cell in horizontal diagrams
const CELL: usize = 5;

/// What to print at each position of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Plain markers; the root is distinguished
    #[default]
    None,
    /// Functional degree labels ("1", "b3", "#5")
    Degree,
    /// Left-hand finger numbers
    Finger,
    /// Note names
    Note,
}

/// Fretboard diagram renderer
#[derive(Debug, Clone)]
pub struct Diagram {
    min_frets: Fret,
    labels: LabelMode,
}

impl Default for Diagram {
    fn default() -> Self {
        Self {
            min_frets: 3,
            labels: LabelMode::None,
        }
    }
}

impl Diagram {
    /// Create a renderer with a window width floor and a label mode
    pub fn new(min_frets: Fret, labels: LabelMode) -> Self {
        Self { min_frets, labels }
    }

    /// Render a shape horizontally, high e string on top
    pub fn render(&self, shape: &Shape, name: Option<&str>) -> String {
        let lo = shape.min_fret();
        let hi = lo.saturating_add(shape.span().max(self.min_frets));
        let edge = if lo <= 1 { "||" } else { "|" };
        let margin = " ".repeat(3 + edge.len());

        let mut out = String::new();
        if let Some(name) = name {
            out.push_str(name);
            out.push('\n');
        }
        out.push_str(&format!("{}{}\n", margin, lo));

        for string in GuitarString::ALL.iter().rev() {
            let mut row = format!("{:>2} {}", string.name(), edge);
            for fret in lo..=hi {
                let cell = match self.finger_at(shape, *string, fret) {
                    Some(f) => center(&self.label_for(&f), CELL, '-'),
                    None => "-".repeat(CELL),
                };
                row.push_str(&cell);
                row.push('|');
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }

        let mut markers = margin;
        let mut any = false;
        for fret in lo..=hi {
            let sym = marker_symbol(fret);
            any = any || !sym.is_empty();
            markers.push_str(&center(sym, CELL, ' '));
            markers.push(' ');
        }
        if any {
            out.push_str(markers.trim_end());
            out.push('\n');
        }
        out
    }

    /// Render a shape vertically, low E string on the left
    pub fn render_vertical(&self, shape: &Shape, name: Option<&str>) -> String {
        let lo = shape.min_fret();
        let hi = lo.saturating_add(shape.span().max(self.min_frets));

        let mut out = String::new();
        if let Some(name) = name {
            out.push_str(name);
            out.push('\n');
        }

        let mut header = String::from("    ");
        for string in GuitarString::ALL {
            header.push_str(&format!("{:<2} ", string.name()));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        if lo <= 1 {
            out.push_str(&format!("    {}\n", "=".repeat(GuitarString::ALL.len() * 3 - 1)));
        }

        for fret in lo..=hi {
            let mut row = format!("{:>2}  ", fret);
            for string in GuitarString::ALL {
                let cell = match self.finger_at(shape, string, fret) {
                    Some(f) => self.label_for(&f),
                    None => "|".to_string(),
                };
                row.push_str(&format!("{:<2} ", cell));
            }
            let sym = marker_symbol(fret);
            if !sym.is_empty() {
                row.push_str(sym);
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }

    fn finger_at(&self, shape: &Shape, string: GuitarString, fret: Fret) -> Option<Finger> {
        shape
            .fingers()
            .iter()
            .find(|f| f.string == string && f.fret == fret)
            .copied()
    }

    fn label_for(&self, finger: &Finger) -> String {
        match self.labels {
            LabelMode::None => {
                if finger.degree.is_root() {
                    "@".to_string()
                } else {
                    "o".to_string()
                }
            }
            LabelMode::Degree => finger.degree.label().to_string(),
            LabelMode::Finger => finger
                .fingering
                .map(|f| f.label().to_string())
                .unwrap_or_else(|| "o".to_string()),
            LabelMode::Note => NOTE_NAMES[(finger.semitone % 12) as usize].to_string(),
        }
    }
}

fn marker_symbol(fret: Fret) -> &'static str {
    if fret == 12 {
        ":"
    } else if MARKER_FRETS.contains(&fret) {
        "."
    } else {
        ""
    }
}

fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let mut cell = String::with_capacity(width);
    for _ in 0..left {
        cell.push(fill);
    }
    cell.push_str(text);
    for _ in 0..(width - len - left) {
        cell.push(fill);
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Degree;

    fn voicing() -> Shape {
        // A textbook D-7 drop 2: A D F C on the middle strings
        let fingers = [
            (GuitarString::A, 12, Degree::Five),
            (GuitarString::D, 12, Degree::One),
            (GuitarString::G, 10, Degree::FlatThree),
            (GuitarString::B, 13, Degree::FlatSeven),
        ];
        let mut shape = Shape::new(Finger::new(9, fingers[0].2, fingers[0].0, fingers[0].1));
        for &(string, fret, degree) in &fingers[1..] {
            let semitone = (string.open_pitch_class().semitone() + fret) % 12;
            shape = shape.extended(Finger::new(semitone, degree, string, fret));
        }
        shape.with_fingering()
    }

    #[test]
    fn test_horizontal_layout() {
        let out = Diagram::default().render(&voicing(), Some("D -7 drop 2"));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "D -7 drop 2");
        assert_eq!(lines[1].trim(), "10");
        // Strings top to bottom: e B G D A E
        assert!(lines[2].starts_with(" e |"));
        assert!(lines[7].starts_with(" E |"));
        // Root on the D string, plain marker elsewhere
        assert!(lines[5].contains('@'));
        assert!(lines[3].contains('o') && lines[4].contains('o') && lines[6].contains('o'));
        // Double dot under fret 12
        assert!(lines[8].contains(':'));
    }

    #[test]
    fn test_empty_cells_have_no_markers() {
        let out = Diagram::default().render(&voicing(), None);
        // The high and low E rows carry no positions
        for line in out.lines().filter(|l| l.starts_with(" e") || l.starts_with(" E")) {
            assert!(!line.contains('o') && !line.contains('@'));
        }
    }

    #[test]
    fn test_degree_labels() {
        let diagram = Diagram::new(3, LabelMode::Degree);
        let out = diagram.render(&voicing(), None);
        assert!(out.contains("b3"));
        assert!(out.contains("b7"));
        assert!(out.contains("-1-"));
    }

    #[test]
    fn test_finger_labels() {
        let diagram = Diagram::new(3, LabelMode::Finger);
        let out = diagram.render(&voicing(), None);
        // Frets 10 12 12 13 above fret 10: index, ring, ring, pinky
        assert!(out.contains("-1-"));
        assert!(out.contains("-3-"));
        assert!(out.contains("-4-"));
    }

    #[test]
    fn test_note_labels() {
        let diagram = Diagram::new(3, LabelMode::Note);
        let out = diagram.render(&voicing(), None);
        for name in ["A", "D", "F", "C"] {
            assert!(out.contains(name), "missing note {}", name);
        }
    }

    #[test]
    fn test_vertical_layout() {
        let out = Diagram::default().render_vertical(&voicing(), Some("D -7 drop 2"));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "D -7 drop 2");
        assert_eq!(lines[1], "    E  A  D  G  B  e");
        // One row per fret from 10 to 13
        assert!(lines[2].starts_with("10"));
        assert!(lines[5].starts_with("13"));
        // Fret 12 row holds the root and the octave marker
        let twelve = lines[4];
        assert!(twelve.contains('@'));
        assert!(twelve.ends_with(':'));
    }

    #[test]
    fn test_window_floor() {
        let single = Shape::new(Finger::new(0, Degree::One, GuitarString::A, 3));
        let out = Diagram::default().render(&single, None);
        // A one-fret shape still draws a window of min_frets + 1 cells
        let row = out.lines().find(|l| l.starts_with(" A")).unwrap();
        assert_eq!(row.matches('|').count(), 5);
    }

    #[test]
    fn test_nut_doubling() {
        let open_shape = Shape::new(Finger::new(9, Degree::One, GuitarString::A, 1));
        let out = Diagram::default().render(&open_shape, None);
        assert!(out.lines().any(|l| l.contains("||")));

        let vertical = Diagram::default().render_vertical(&open_shape, None);
        assert!(vertical.lines().any(|l| l.trim().chars().all(|c| c == '=') && !l.trim().is_empty()));
    }

    #[test]
    fn test_window_survives_extreme_min_frets() {
        let shape = Shape::new(Finger::new(9, Degree::One, GuitarString::A, 12));
        let diagram = Diagram::new(u8::MAX, LabelMode::None);
        let out = diagram.render(&shape, None);
        assert!(out.lines().count() >= 7);
        let vertical = diagram.render_vertical(&shape, None);
        assert!(vertical.lines().next().unwrap().starts_with("    E"));
    }

    #[test]
    fn test_note_labels_normalize_semitones() {
        let shape = Shape::new(Finger::new(17, Degree::One, GuitarString::G, 10));
        let out = Diagram::new(3, LabelMode::Note).render(&shape, None);
        assert!(out.contains("F"));
    }
}
