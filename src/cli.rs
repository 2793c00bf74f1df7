use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::soil_analysis::report::DEFAULT_OUTPUT_DIR;
use crate::soil_analysis::AnalysisConfig;

#[derive(Parser, Debug)]
#[command(
    name = "soil-scanner",
    version,
    about = "Classify a soil photograph and write preventive measures for its condition",
    long_about = "
Soil Scanner

Estimates the condition of a soil sample from a single photograph. The image is
resized to 500x500, converted to grayscale and its mean intensity is mapped to one
of six conditions: Flooded Soil, Sand Soil, Alkaline Soil, Dry Soil, Moist or Wet.
A report with preventive measures is written to <OUTPUT>/<Condition>.txt and the
color and grayscale images are shown in a viewer window.

Exit status: 0 classified, 1 error, 2 mean intensity outside every known range.

Example Usage:
  # Analyze a photo, write solutions/Dry_Soil.txt and show the viewer
  soil-scanner ~/Soil-image/Dry4.jpg

  # Write reports somewhere else and skip the viewer
  soil-scanner ~/Soil-image/Dry4.jpg -o ~/reports --no-display

  # Classify only, nothing written or displayed
  soil-scanner ~/Soil-image/Dry4.jpg --dry-run --verbose

  # Machine readable output
  soil-scanner ~/Soil-image/Dry4.jpg --json

  # Show the intensity ranges of every condition
  soil-scanner --list-conditions"
)]
pub struct Args {
    /// Soil photograph to analyze
    #[arg(value_name = "IMAGE")]
    pub input_path: Option<PathBuf>,

    /// Directory for condition reports [default: solutions]
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file; command line values take precedence
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Do not open the image viewer
    #[arg(long = "no-display")]
    pub no_display: bool,

    /// Classify without writing a report or opening the viewer
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Emit JSON lines on stdout instead of styled output
    #[arg(long = "json")]
    pub json: bool,

    /// Print the intensity range of every condition and exit
    #[arg(long = "list-conditions")]
    pub list_conditions: bool,

    /// Enable verbose output with detailed progress information
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// The viewer only opens for interactive, non-dry runs
    pub fn show_display(&self) -> bool {
        !self.no_display && !self.dry_run && !self.json
    }

    /// Report directory from the command line or config, else `solutions`
    pub fn output_dir(&self) -> &Path {
        self.output_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR))
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            output_dir: self.output_dir().to_path_buf(),
            verbose: self.verbose && !self.json,
            dry_run: self.dry_run,
        }
    }

    /// The image to analyze, which may also come from the config file
    pub fn require_input(&self) -> Result<PathBuf> {
        self.input_path.clone().ok_or_else(|| {
            anyhow::anyhow!("No input image given. Pass IMAGE or set inputPath in --config")
        })
    }
}
