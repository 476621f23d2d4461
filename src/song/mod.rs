// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song definitions.
//!
//! A song is a YAML document listing sections, each naming the chords
//! and scales it uses. From a song the library collects every distinct
//! root and pattern and produces the matching scale shapes, arpeggio
//! shapes, and drop 2 chord voicings, keyed for stable file naming.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::fretboard::{generate, generate_drop, Fret, GuitarString, Shape, ShapeError};
use crate::music::PitchClass;
use crate::render::Diagram;

/// A root and pattern name as written in a song file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    /// Root pitch class
    pub root: PitchClass,
    /// Pattern name, looked up in the catalog when shapes are built
    #[serde(rename = "type")]
    pub kind: String,
}

impl SongEntry {
    /// Stable key used to group and name this entry's shapes
    pub fn key(&self) -> String {
        format!("{}_{}", self.root.name(), self.kind)
    }
}

/// One section of a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name ("A", "Bridge")
    pub name: String,
    #[serde(default)]
    pub chords: Vec<SongEntry>,
    #[serde(default)]
    pub scales: Vec<SongEntry>,
}

/// A song loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Song {
    /// Load a song from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read song file: {}", path.display()))?;
        let song = Self::from_yaml(&contents)?;
        info!(
            "Loaded song '{}' with {} sections from {}",
            song.title,
            song.sections.len(),
            path.display()
        );
        Ok(song)
    }

    /// Parse a song from YAML text
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse song YAML")
    }

    /// Serialize the song to YAML text
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize song to YAML")
    }

    /// Save the song to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let yaml = self.to_yaml()?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write song file: {}", path.display()))?;
        Ok(())
    }

    /// Scale shapes for every distinct scale entry, keyed by root and pattern
    pub fn scale_shapes(&self) -> Result<BTreeMap<String, Vec<Shape>>, ShapeError> {
        self.collect(|s| &s.scales, |e| generate(e.root, &e.kind))
    }

    /// Arpeggio shapes for every distinct chord entry
    pub fn arpeggio_shapes(&self) -> Result<BTreeMap<String, Vec<Shape>>, ShapeError> {
        self.collect(|s| &s.chords, |e| generate(e.root, &e.kind))
    }

    /// Drop 2 voicings for every distinct chord entry, seeded on the D string
    pub fn drop2_shapes(&self) -> Result<BTreeMap<String, Vec<Shape>>, ShapeError> {
        self.collect(
            |s| &s.chords,
            |e| generate_drop(e.root, &e.kind, 2, GuitarString::D),
        )
    }

    fn collect<P, B>(&self, pick: P, build: B) -> Result<BTreeMap<String, Vec<Shape>>, ShapeError>
    where
        P: Fn(&Section) -> &[SongEntry],
        B: Fn(&SongEntry) -> Result<Vec<Shape>, ShapeError>,
    {
        let mut shapes = BTreeMap::new();
        for section in &self.sections {
            for entry in pick(section) {
                let key = entry.key();
                if shapes.contains_key(&key) {
                    continue;
                }
                shapes.insert(key, build(entry)?);
            }
        }
        Ok(shapes)
    }

    /// Render every shape of the song into text files under `dir`.
    ///
    /// Files are named `<kind>_<root>_<pattern>_<index>.txt` where kind is
    /// `scale`, `arpeggio`, or `drop2`. Indices follow the sorted shape
    /// order, so a shape keeps its number even when flagged neighbours are
    /// skipped. With `init_fret` set, only shapes starting on that fret or
    /// the fret below are written. Returns the number of files written.
    pub fn write_diagrams(
        &self,
        dir: &Path,
        diagram: &Diagram,
        vertical: bool,
        init_fret: Option<Fret>,
    ) -> anyhow::Result<usize> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        let groups = [
            ("scale", self.scale_shapes()?),
            ("arpeggio", self.arpeggio_shapes()?),
            ("drop2", self.drop2_shapes()?),
        ];

        let mut written = 0;
        for (prefix, shapes) in &groups {
            let before = written;
            for (key, shapes) in shapes {
                for (index, shape) in shapes.iter().enumerate() {
                    if !shape.is_valid() {
                        continue;
                    }
                    if let Some(fret) = init_fret {
                        let min = shape.min_fret();
                        if min != fret && min + 1 != fret {
                            continue;
                        }
                    }
                    let title = format!("{} #{}", key.replace('_', " "), index);
                    let text = if vertical {
                        diagram.render_vertical(shape, Some(&title))
                    } else {
                        diagram.render(shape, Some(&title))
                    };
                    let file = dir.join(format!("{}_{}_{}.txt", prefix, key, index));
                    fs::write(&file, text)
                        .with_context(|| format!("Failed to write diagram: {}", file.display()))?;
                    written += 1;
                }
            }
            debug!("Rendered {} '{}' diagrams", written - before, prefix);
        }
        info!("Wrote {} diagrams to {}", written, dir.display());
        Ok(written)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.author.is_empty() {
            write!(f, " ({})", self.author)?;
        }
        write!(f, ", {} sections", self.sections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG_YAML: &str = r#"
title: Autumn Leaves
author: Kosma
sections:
  - name: A
    chords:
      - root: D
        type: "-7"
      - root: G
        type: "7"
    scales:
      - root: C
        type: Major
  - name: B
    chords:
      - root: D
        type: "-7"
"#;

    #[test]
    fn test_from_yaml() {
        let song = Song::from_yaml(SONG_YAML).unwrap();
        assert_eq!(song.title, "Autumn Leaves");
        assert_eq!(song.author, "Kosma");
        assert_eq!(song.sections.len(), 2);
        assert_eq!(song.sections[0].chords[0].root, PitchClass::D);
        assert_eq!(song.sections[0].chords[0].kind, "-7");
        assert!(song.sections[1].scales.is_empty());
    }

    #[test]
    fn test_yaml_round_trip() {
        let song = Song::from_yaml(SONG_YAML).unwrap();
        let round = Song::from_yaml(&song.to_yaml().unwrap()).unwrap();
        assert_eq!(song, round);
    }

    #[test]
    fn test_save_and_load() {
        let song = Song::from_yaml(SONG_YAML).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.yaml");
        song.save(&path).unwrap();
        let loaded = Song::load(&path).unwrap();
        assert_eq!(song, loaded);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Song::load("/nonexistent/song.yaml").is_err());
    }

    #[test]
    fn test_entries_deduplicated_across_sections() {
        let song = Song::from_yaml(SONG_YAML).unwrap();
        let arpeggios = song.arpeggio_shapes().unwrap();
        // D -7 appears in both sections but is built once
        assert_eq!(arpeggios.len(), 2);
        assert!(arpeggios.contains_key("D_-7"));
        assert!(arpeggios.contains_key("G_7"));

        let scales = song.scale_shapes().unwrap();
        assert_eq!(scales.len(), 1);
        assert!(scales.contains_key("C_Major"));
    }

    #[test]
    fn test_unknown_pattern_surfaces() {
        let song = Song::from_yaml(
            "title: Bad\nsections:\n  - name: A\n    chords:\n      - root: C\n        type: nope\n",
        )
        .unwrap();
        assert!(song.arpeggio_shapes().is_err());
    }

    #[test]
    fn test_write_diagrams() {
        let song = Song::from_yaml(SONG_YAML).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let written = song
            .write_diagrams(dir.path(), &Diagram::default(), false, None)
            .unwrap();
        assert!(written > 0);

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), written);
        for prefix in ["scale_C_Major_", "arpeggio_D_-7_", "drop2_G_7_"] {
            assert!(
                names.iter().any(|n| n.starts_with(prefix)),
                "no file with prefix {}",
                prefix
            );
        }
    }

    #[test]
    fn test_write_diagrams_fret_filter() {
        let song = Song::from_yaml(SONG_YAML).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let all = song
            .write_diagrams(dir.path(), &Diagram::default(), false, None)
            .unwrap();
        let dir_filtered = tempfile::tempdir().unwrap();
        let some = song
            .write_diagrams(dir_filtered.path(), &Diagram::default(), false, Some(5))
            .unwrap();
        assert!(some < all);

        let dir_empty = tempfile::tempdir().unwrap();
        let none = song
            .write_diagrams(dir_empty.path(), &Diagram::default(), false, Some(200))
            .unwrap();
        assert_eq!(none, 0);
    }
}
