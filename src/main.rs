// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use fretwork::config::AppConfig;
use fretwork::render::{Diagram, LabelMode};
use fretwork::song::Song;
use fretwork::{generate, generate_drop, Fret, GuitarString, PatternType, PitchClass, Shape};

#[derive(Parser)]
#[command(name = "fretwork", version, about = "Fingering shape generator for six-string guitar")]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LabelArg {
    None,
    Degree,
    Finger,
    Note,
}

impl From<LabelArg> for LabelMode {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::None => LabelMode::None,
            LabelArg::Degree => LabelMode::Degree,
            LabelArg::Finger => LabelMode::Finger,
            LabelArg::Note => LabelMode::Note,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every pattern in the catalog with its degree formula
    Patterns,

    /// Generate shapes for a root and pattern
    Shapes {
        /// Root pitch class (C, C#, Db, ...)
        root: String,

        /// Pattern name from the catalog (Major, -7, TriadMaj, ...)
        pattern: String,

        /// What to print at each diagram position
        #[arg(short, long, value_enum)]
        labels: Option<LabelArg>,

        /// Draw diagrams vertically, strings as columns
        #[arg(long)]
        vertical: bool,

        /// Include shapes the filter flagged
        #[arg(long)]
        all: bool,

        /// Print shapes as JSON instead of diagrams
        #[arg(long)]
        json: bool,
    },

    /// Generate drop voicings for a chord
    Drops {
        /// Root pitch class (C, C#, Db, ...)
        root: String,

        /// Chord pattern name from the catalog (Maj7, -7, º7, ...)
        pattern: String,

        /// Which voice from the top to drop an octave
        #[arg(short, long, default_value = "2")]
        drop: usize,

        /// String the lowest voice lands on (E, A, D, G, B, e)
        #[arg(short, long, default_value = "D")]
        bass: String,

        /// What to print at each diagram position
        #[arg(short, long, value_enum)]
        labels: Option<LabelArg>,

        /// Draw diagrams vertically, strings as columns
        #[arg(long)]
        vertical: bool,

        /// Include voicings the filter flagged
        #[arg(long)]
        all: bool,

        /// Print voicings as JSON instead of diagrams
        #[arg(long)]
        json: bool,
    },

    /// Render diagrams for every chord and scale of a song file
    Song {
        /// Song YAML file
        file: PathBuf,

        /// Output directory (defaults to the configured out_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Only write shapes starting on this fret or the fret below
        #[arg(long)]
        fret: Option<Fret>,

        /// Draw diagrams vertically, strings as columns
        #[arg(long)]
        vertical: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = AppConfig::load()?;

    match cli.command {
        Commands::Patterns => {
            for pattern in PatternType::ALL {
                let formula: Vec<&str> = pattern.degrees().iter().map(|d| d.label()).collect();
                println!("{:<14} {}", pattern.name(), formula.join(" "));
            }
        }

        Commands::Shapes { root, pattern, labels, vertical, all, json } => {
            let root = parse_root(&root)?;
            let shapes = generate(root, &pattern)?;
            let diagram = diagram_for(&config, labels);
            let vertical = vertical || config.render.vertical;
            let title = format!("{} {}", root.name(), pattern);
            print_shapes(&shapes, &title, &diagram, vertical, all, json)?;
        }

        Commands::Drops { root, pattern, drop, bass, labels, vertical, all, json } => {
            let root = parse_root(&root)?;
            let bass = GuitarString::from_str(&bass)
                .ok_or_else(|| anyhow!("unknown string: {} (expected E, A, D, G, B, or e)", bass))?;
            let shapes = generate_drop(root, &pattern, drop, bass)?;
            let diagram = diagram_for(&config, labels);
            let vertical = vertical || config.render.vertical;
            let title = format!("{} {} drop {}", root.name(), pattern, drop);
            print_shapes(&shapes, &title, &diagram, vertical, all, json)?;
        }

        Commands::Song { file, out, fret, vertical } => {
            let song = Song::load(&file)?;
            let dir = out.unwrap_or_else(|| config.render.out_dir.clone());
            let diagram = config.render.diagram();
            let vertical = vertical || config.render.vertical;
            let written = song.write_diagrams(&dir, &diagram, vertical, fret)?;
            println!("{}: wrote {} diagrams to {}", song, written, dir.display());
        }
    }

    Ok(())
}

fn parse_root(text: &str) -> Result<PitchClass> {
    PitchClass::from_str(text).ok_or_else(|| anyhow!("unknown root: {}", text))
}

fn diagram_for(config: &AppConfig, labels: Option<LabelArg>) -> Diagram {
    let labels = labels.map(LabelMode::from).unwrap_or(config.render.labels);
    Diagram::new(config.render.min_frets, labels)
}

fn print_shapes(
    shapes: &[Shape],
    title: &str,
    diagram: &Diagram,
    vertical: bool,
    all: bool,
    json: bool,
) -> Result<()> {
    if json {
        let listed: Vec<&Shape> = shapes.iter().filter(|s| all || s.is_valid()).collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    let mut shown = 0;
    for (index, shape) in shapes.iter().enumerate() {
        if !all && !shape.is_valid() {
            continue;
        }
        let mut name = format!("{} #{}", title, index);
        if !shape.is_valid() {
            name.push_str(" (flagged)");
        }
        let text = if vertical {
            diagram.render_vertical(shape, Some(&name))
        } else {
            diagram.render(shape, Some(&name))
        };
        println!("{}", text);
        shown += 1;
    }
    println!("{} of {} shapes", shown, shapes.len());
    Ok(())
}
