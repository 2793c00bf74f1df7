#[cfg(feature = "gui")]
pub mod viewer;

use anyhow::Result;

use crate::soil_analysis::SoilAnalysis;

/// Show the color and grayscale images of an analysis, blocking until dismissed
#[cfg(feature = "gui")]
pub fn display_results(analysis: &SoilAnalysis) -> Result<()> {
    viewer::show(analysis)
}

#[cfg(not(feature = "gui"))]
pub fn display_results(analysis: &SoilAnalysis) -> Result<()> {
    crate::utils::warn_println(&format!(
        "Image viewer not available, skipping display of {}. Rebuild with --features gui",
        analysis.input_path.display()
    ));
    Ok(())
}

pub fn is_available() -> bool {
    cfg!(feature = "gui")
}
