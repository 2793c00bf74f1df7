//! JSON output for scripting
//!
//! When --json is enabled the result of the run is emitted as a single JSON
//! line on stdout and all styled output is suppressed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::soil_analysis::SoilAnalysis;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonMessage {
    /// Image analyzed (and report written unless dry run)
    Analysis {
        input_path: String,
        mean_intensity: f64,
        condition: String,
        classified: bool,
        report_path: Option<String>,
    },
    /// Analysis could not complete
    Failed { input_path: String, error: String },
}

impl JsonMessage {
    /// Emit JSON message to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn from_analysis(analysis: &SoilAnalysis) -> Self {
        Self::Analysis {
            input_path: analysis.input_path.display().to_string(),
            mean_intensity: analysis.mean_intensity(),
            condition: analysis.label().to_string(),
            classified: analysis.classification.is_classified(),
            report_path: analysis
                .report_path
                .as_ref()
                .map(|p| p.display().to_string()),
        }
    }

    pub fn failed(input_path: &Path, error: impl Into<String>) -> Self {
        Self::Failed {
            input_path: input_path.display().to_string(),
            error: error.into(),
        }
    }
}
