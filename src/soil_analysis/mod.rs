pub mod advisory;
pub mod classify;
pub mod preprocess;
pub mod report;
pub mod summary;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::utils::verbose_println;

pub use classify::{
    exit_status, Classification, GrayF32Image, SoilCondition, EXIT_CLASSIFIED, EXIT_FAILURE,
    EXIT_UNCLASSIFIED, UNCLASSIFIED_LABEL,
};
pub use preprocess::{PreparedImage, ANALYSIS_SIZE};

#[derive(Debug, Error)]
pub enum SoilError {
    #[error("Image not found: {}", .path.display())]
    ImageNotFound { path: PathBuf },

    #[error("Failed to read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to resize image: {0}")]
    Resize(String),

    #[error("Failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub output_dir: PathBuf,
    pub verbose: bool,
    pub dry_run: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(report::DEFAULT_OUTPUT_DIR),
            verbose: false,
            dry_run: false,
        }
    }
}

/// Everything learned about one soil photograph
#[derive(Debug, Clone)]
pub struct SoilAnalysis {
    pub input_path: PathBuf,
    pub image: PreparedImage,
    pub classification: Classification,
    pub advisory: &'static str,
    /// Set once the report has been written; stays `None` in dry runs
    pub report_path: Option<PathBuf>,
}

impl SoilAnalysis {
    pub fn label(&self) -> &'static str {
        self.classification.label()
    }

    pub fn mean_intensity(&self) -> f64 {
        self.classification.mean()
    }
}

pub struct SoilAnalyzer {
    config: AnalysisConfig,
}

impl SoilAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Load, preprocess and classify one image. No files are written.
    pub fn analyze(&self, input_path: &Path) -> Result<SoilAnalysis, SoilError> {
        verbose_println(
            self.config.verbose,
            &format!("Analyzing: {}", input_path.display()),
        );

        let image = preprocess::preprocess_image(input_path, ANALYSIS_SIZE)?;
        verbose_println(
            self.config.verbose,
            &format!("Resized to {}x{}", ANALYSIS_SIZE, ANALYSIS_SIZE),
        );

        let classification = classify::analyze_soil_condition(&image.gray);
        let advisory = advisory::lookup(classification.label());

        Ok(SoilAnalysis {
            input_path: input_path.to_path_buf(),
            image,
            classification,
            advisory,
            report_path: None,
        })
    }

    /// Persist the report for an analysis, unless running dry
    pub fn write_report(&self, analysis: &mut SoilAnalysis) -> Result<(), SoilError> {
        if self.config.dry_run {
            verbose_println(self.config.verbose, "Dry run mode: Skipping report file");
            return Ok(());
        }

        let path = report::write_report(
            &self.config.output_dir,
            analysis.label(),
            analysis.advisory,
        )?;
        verbose_println(
            self.config.verbose,
            &format!("Report written to {}", path.display()),
        );
        analysis.report_path = Some(path);
        Ok(())
    }

    /// Analyze an image and write its report
    pub fn run(&self, input_path: &Path) -> Result<SoilAnalysis, SoilError> {
        let mut analysis = self.analyze(input_path)?;
        self.write_report(&mut analysis)?;
        Ok(analysis)
    }
}
