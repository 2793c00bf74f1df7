// Library exports for the CLI and integration tests
pub mod cli;
pub mod config_file;
pub mod gui;
pub mod json_output;
pub mod soil_analysis;
pub mod utils;

// Re-export commonly used types
pub use cli::Args;
pub use json_output::JsonMessage;
pub use soil_analysis::{
    advisory, AnalysisConfig, Classification, SoilAnalysis, SoilAnalyzer, SoilCondition,
    SoilError,
};
