use std::fs;
use std::path::{Path, PathBuf};

use super::SoilError;

/// Directory reports land in when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "solutions";

const REPORT_EXTENSION: &str = "txt";

/// `Dry Soil` -> `Dry_Soil.txt`
pub fn report_filename(label: &str) -> String {
    format!("{}.{}", label.replace(' ', "_"), REPORT_EXTENSION)
}

/// Path the report for `label` would be written to
pub fn report_path(output_dir: &Path, label: &str) -> PathBuf {
    output_dir.join(report_filename(label))
}

pub fn render_report(label: &str, advisory: &str) -> String {
    format!(
        "Soil Condition: {}\nPreventive Measures:\n{}\n",
        label, advisory
    )
}

/// Write the condition report, replacing any earlier report for the same label.
///
/// Creates `output_dir` when it is missing.
pub fn write_report(output_dir: &Path, label: &str, advisory: &str) -> Result<PathBuf, SoilError> {
    fs::create_dir_all(output_dir).map_err(|source| SoilError::ReportWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = report_path(output_dir, label);
    fs::write(&path, render_report(label, advisory)).map_err(|source| {
        SoilError::ReportWrite {
            path: path.clone(),
            source,
        }
    })?;

    log::debug!("Report written to {}", path.display());
    Ok(path)
}
