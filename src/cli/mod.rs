pub mod completions;
pub mod convert;

use clap::Parser;
use clap_complete::Shell;

use crate::output::Verbosity;

const EXAMPLES: &str = "\
Examples:
  # Basic grid slice (32x32), names with counts
  gridatlas sheet.png --grid 32 32 --names idle:4 walk:8 attack:6

  # With margin and spacing
  gridatlas sheet.png --grid 64 64 --margin 2 2 --spacing 1 1 --names coin:10

  # Atlas only
  gridatlas sheet.png --grid 16 16 --names tile:64 --out atlas

  # JSON only with custom format/filter/repeat
  gridatlas sheet.png --grid 48 48 --names enemy:12 --out json \\
    --format RGBA4444 --filter Nearest,Nearest --repeat x

  # Aliases that reuse an existing tile
  gridatlas sheet.png --grid 32 32 --names idle:4 walk:4 \\
    --dup default=idle:0,stand=idle:0 walk_fast:1=walk:1

  # Mixed name list (implicit count = 1)
  gridatlas sheet.png --grid 64 32 --names banner victory:3 lose:2 logo
";

/// gridatlas - Slice a grid sprite sheet into .atlas and JSON descriptors
#[derive(Parser, Debug)]
#[command(name = "gridatlas")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,

    /// Print shell completions to stdout and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Only print warnings
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print grid geometry and config details
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
