//! Command-line renderer for `.cgg` color grid documents.
//!
//! Loads a document, optionally re-rolls its unlocked colors, and writes
//! the rendered grid to an image file.

use std::env;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use chromagrid_editor::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION, PaletteEditor, rng::SimpleRng};
use chromagrid_format::GridDocument;
use chromagrid_paint::{GridGeometry, SpecKind, render};
use chromagrid_raster::Renderer;
use owo_colors::OwoColorize;

/// Canvas edge length used when `--size` is not given.
const DEFAULT_CANVAS_SIZE: u32 = 256;
/// Output file name used when none is given.
const DEFAULT_OUTPUT: &str = "color_grid.png";

/// Parsed command line.
struct Options {
    /// Input `.cgg` document.
    input: PathBuf,
    /// Output image path.
    output: PathBuf,
    /// Square canvas edge length in pixels.
    size: u32,
    /// `Some` when `--randomize` was given; the inner value is the seed,
    /// `None` meaning "derive one from the clock".
    randomize: Option<Option<u32>>,
}

impl Options {
    /// Parse raw arguments (program name already stripped).
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut input = None;
        let mut output = None;
        let mut size = DEFAULT_CANVAS_SIZE;
        let mut randomize = None;

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--size" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--size requires a pixel count".to_string())?;
                    size = value
                        .parse()
                        .map_err(|_| format!("invalid --size value '{value}'"))?;
                    if size == 0 {
                        return Err("--size must be at least 1".to_string());
                    }
                }
                "--randomize" => {
                    // An optional numeric seed may follow.
                    let mut seed = None;
                    if let Some(next) = iter.peek()
                        && let Ok(value) = next.parse::<u32>()
                    {
                        seed = Some(value);
                        let _ = iter.next();
                    }
                    randomize = Some(seed);
                }
                other if other.starts_with("--") => {
                    return Err(format!("unknown option '{other}'"));
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ if output.is_none() => output = Some(PathBuf::from(arg)),
                _ => return Err(format!("unexpected argument '{arg}'")),
            }
        }

        let input = input.ok_or_else(|| "missing input file".to_string())?;
        Ok(Self {
            input,
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            size,
            randomize,
        })
    }
}

fn usage() {
    eprintln!("Usage: chromagrid-cli <file.cgg> [output.png]");
    eprintln!("       --size <pixels>      square canvas edge (default {DEFAULT_CANVAS_SIZE})");
    eprintln!("       --randomize [seed]   re-roll unlocked colors before rendering");
}

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match Options::parse(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            usage();
            process::exit(1);
        }
    };

    let document = GridDocument::load(&options.input)
        .with_context(|| format!("failed to load '{}'", options.input.display()))?;

    if document.rows < MIN_GRID_DIMENSION
        || document.rows > MAX_GRID_DIMENSION
        || document.cols < MIN_GRID_DIMENSION
        || document.cols > MAX_GRID_DIMENSION
    {
        eprintln!(
            "{}",
            format!(
                "warning: grid {}x{} is outside 1..={MAX_GRID_DIMENSION}, clamping",
                document.rows, document.cols
            )
            .yellow()
        );
    }
    // The editor clamps hostile dimensions on entry, so a hand-edited
    // document cannot reach the renderer's zero-cell assertion.
    let mut editor = PaletteEditor::from_document(document);

    if let Some(seed) = options.randomize {
        let seed = seed.unwrap_or_else(clock_seed);
        println!("Randomizing unlocked colors (seed {seed})");
        let mut rng = SimpleRng::new(seed);
        editor.randomize(&mut rng);
    }

    let document = editor.into_document();
    print_summary(&document);

    let capacity = document.rows * document.cols;
    if document.colors.len() > capacity {
        let dropped = document.colors.len() - capacity;
        eprintln!(
            "{}",
            format!(
                "warning: {dropped} spec(s) beyond the {}x{} grid will not be rendered",
                document.rows, document.cols
            )
            .yellow()
        );
    }

    let geometry = GridGeometry::new(
        document.rows,
        document.cols,
        options.size as f32,
        options.size as f32,
    );
    let cells = render(&document.colors, &geometry);

    let mut renderer = Renderer::new(options.size, options.size);
    renderer.render(&cells);
    renderer
        .save(&options.output)
        .with_context(|| format!("failed to write '{}'", options.output.display()))?;

    println!(
        "Saved {size}x{size} image to {}",
        options.output.display(),
        size = options.size
    );
    Ok(())
}

/// Print the loaded palette, one line per spec.
fn print_summary(document: &GridDocument) {
    println!("=== Grid ===");
    println!(
        "{} rows x {} cols, {} spec(s)",
        document.rows,
        document.cols,
        document.colors.len()
    );

    for (index, spec) in document.colors.iter().enumerate() {
        let lock = if spec.locked { " [locked]" } else { "" };
        match spec.kind {
            SpecKind::Solid | SpecKind::Shade => {
                println!("  {index:>3}: {} {}{lock}", spec.kind, spec.main_color);
            }
            SpecKind::Linear => println!(
                "  {index:>3}: {} {} -> {} at {} deg{lock}",
                spec.kind, spec.main_color, spec.secondary_color, spec.angle_degrees
            ),
            SpecKind::Radial => println!(
                "  {index:>3}: {} {} -> {}{lock}",
                spec.kind, spec.main_color, spec.secondary_color
            ),
            SpecKind::BiChromatic => println!(
                "  {index:>3}: {} {} | {} ({}){lock}",
                spec.kind, spec.main_color, spec.secondary_color, spec.orientation
            ),
        }
    }

    if !document.global_attributes.is_empty() {
        println!("=== Attributes ===");
        println!("visualizing '{}'", document.visualize_attribute);
        for (name, color) in &document.global_attributes {
            println!("  {name}: {color}");
        }
    }
}

/// Seed for unseeded `--randomize` runs, derived from the wall clock.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| {
            elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32)
        })
}
