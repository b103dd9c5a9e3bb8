//! Convert command implementation.
//!
//! Loads a sprite sheet, slices it into named tiles, resolves aliases and
//! writes the .atlas and/or .json descriptors. Every parse, slice and alias
//! error is raised before any file is written.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::alias::resolve_aliases;
use crate::config::{Config, OutputKind};
use crate::error::{AtlasError, Result};
use crate::grid::{slice_grid, GridSpec};
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_dups, parse_name_counts};
use crate::render::{write_atlas, write_json, PageSettings, SheetInfo};
use crate::types::Region;

/// Slice a grid sprite sheet into descriptor files
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// PNG sprite sheet to slice
    #[arg(required_unless_present = "completions")]
    pub png: Option<PathBuf>,

    /// Tile width and height
    #[arg(
        long,
        num_args = 2,
        value_names = ["TILE_W", "TILE_H"],
        required_unless_present = "completions",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub grid: Vec<u32>,

    /// Margin from the top-left corner in pixels [default: 0 0]
    #[arg(long, num_args = 2, value_names = ["MX", "MY"])]
    pub margin: Option<Vec<u32>>,

    /// Spacing between tiles in pixels [default: 0 0]
    #[arg(long, num_args = 2, value_names = ["SX", "SY"])]
    pub spacing: Option<Vec<u32>>,

    /// Names in slot order, optionally with counts (e.g. idle:4 walk:8 banner)
    #[arg(long, num_args = 1.., required_unless_present = "completions")]
    pub names: Vec<String>,

    /// Aliases: alias=target:idx or alias:idx=target:idx, comma separated
    #[arg(long, num_args = 0..)]
    pub dup: Vec<String>,

    /// Pixel format written into the .atlas header [default: RGBA8888]
    #[arg(long)]
    pub format: Option<String>,

    /// Min/mag texture filter written into the .atlas header [default: Linear,Linear]
    #[arg(long)]
    pub filter: Option<String>,

    /// Texture repeat mode: none, x, y or xy [default: none]
    #[arg(long)]
    pub repeat: Option<String>,

    /// Which descriptors to write [default: both]
    #[arg(long, value_enum)]
    pub out: Option<OutputKind>,

    /// Directory for the descriptors (default: beside the input)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Defaults file (default: gridatlas.yaml beside the input, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// What a conversion produced.
#[derive(Debug)]
pub struct ConvertReport {
    /// Final region list, aliases first.
    pub regions: Vec<Region>,
    /// Grid tiles requested by --names.
    pub requested: usize,
    /// Grid tiles actually placed.
    pub produced: usize,
    /// Descriptor files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Options after merging flags, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolved {
    grid: GridSpec,
    page: PageSettings,
    out: OutputKind,
    output_dir: Option<PathBuf>,
}

fn pair(values: Option<&[u32]>, fallback: Option<[u32; 2]>) -> (u32, u32) {
    match (values, fallback) {
        (Some([a, b]), _) => (*a, *b),
        (_, Some([a, b])) => (a, b),
        _ => (0, 0),
    }
}

impl ConvertArgs {
    fn resolve(&self, config: &Config) -> Result<Resolved> {
        let (tile_w, tile_h) = match self.grid.as_slice() {
            [w, h] => (*w, *h),
            _ => {
                return Err(AtlasError::InvalidGrid {
                    message: "--grid takes exactly two values".to_string(),
                    help: Some("Pass --grid TILE_W TILE_H".to_string()),
                })
            }
        };
        let (mx, my) = pair(self.margin.as_deref(), config.margin);
        let (sx, sy) = pair(self.spacing.as_deref(), config.spacing);

        let defaults = PageSettings::default();
        let page = PageSettings {
            format: pick(&self.format, &config.format, defaults.format),
            filter: pick(&self.filter, &config.filter, defaults.filter),
            repeat: pick(&self.repeat, &config.repeat, defaults.repeat),
        };

        Ok(Resolved {
            grid: GridSpec::new(tile_w, tile_h)
                .with_margin(mx, my)
                .with_spacing(sx, sy),
            page,
            out: self.out.or(config.out).unwrap_or_default(),
            output_dir: self.output_dir.clone().or_else(|| config.output_dir.clone()),
        })
    }
}

fn pick(flag: &Option<String>, config: &Option<String>, default: String) -> String {
    flag.clone().or_else(|| config.clone()).unwrap_or(default)
}

/// Descriptor path for `input` with `extension`, inside `dir` if given.
pub fn output_path(input: &Path, dir: Option<&Path>, extension: &str) -> PathBuf {
    match (dir, input.file_name()) {
        (Some(dir), Some(name)) => dir.join(Path::new(name).with_extension(extension)),
        _ => input.with_extension(extension),
    }
}

/// Decode the image and return its pixel dimensions.
fn load_dimensions(path: &Path) -> Result<(u32, u32)> {
    let img = image::open(path)
        .map_err(|e| AtlasError::ImageLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    Ok((img.width(), img.height()))
}

pub fn run(args: &ConvertArgs, printer: &Printer) -> Result<ConvertReport> {
    let path = args
        .png
        .as_deref()
        .ok_or_else(|| AtlasError::InputNotFound {
            path: PathBuf::new(),
        })?;
    let display = display_path(path);

    if !path.exists() {
        return Err(AtlasError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.extension().and_then(|e| e.to_str()) != Some("png") {
        printer.warning("Warning", &format!("{} does not have a .png extension", display));
    }

    let config = match Config::discover(args.config.as_deref(), path)? {
        Some((config_path, config)) => {
            printer.verbose("Config", &display_path(&config_path));
            config
        }
        None => Config::default(),
    };
    let opts = args.resolve(&config)?;

    let names = parse_name_counts(&args.names)?;
    let dups = parse_dups(&args.dup)?;

    printer.status("Loading", &display);
    let (width, height) = load_dimensions(path)?;
    printer.info("Analyzed", &format!("{}x{} image", width, height));

    let g = &opts.grid;
    printer.verbose(
        "Grid",
        &format!(
            "{}x{} tiles, margin {},{}, spacing {},{}",
            g.tile_w, g.tile_h, g.margin_x, g.margin_y, g.spacing_x, g.spacing_y
        ),
    );

    let outcome = slice_grid(width, height, g, &names)?;
    if outcome.is_partial() {
        printer.warning(
            "Warning",
            &format!(
                "Only produced {}/{} tiles before hitting image bounds",
                outcome.produced(),
                outcome.requested
            ),
        );
    }
    printer.info("Sliced", &plural(outcome.produced(), "tile", "tiles"));

    let requested = outcome.requested;
    let produced = outcome.produced();
    let regions = resolve_aliases(outcome.regions, &dups)?;
    if !dups.is_empty() {
        printer.info("Aliased", &plural(dups.len(), "alias", "aliases"));
    }

    let dir = opts.output_dir.as_deref();
    if let Some(dir) = dir {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| AtlasError::Io {
                path: dir.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let image_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());
    let sheet = SheetInfo::new(image_name, width, height);

    let mut written = Vec::new();

    if opts.out.writes_atlas() {
        let atlas_path = output_path(path, dir, "atlas");
        write_atlas(&sheet, &opts.page, &regions, &atlas_path)?;
        printer.status("Wrote", &display_path(&atlas_path));
        written.push(atlas_path);
    }

    if opts.out.writes_json() {
        let json_path = output_path(path, dir, "json");
        write_json(&sheet, &regions, &json_path)?;
        printer.status("Wrote", &display_path(&json_path));
        written.push(json_path);
    }

    Ok(ConvertReport {
        regions,
        requested,
        produced,
        written,
    })
}
