use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

use soil_scanner::advisory;
use soil_scanner::{AnalysisConfig, SoilAnalyzer, SoilCondition, SoilError};

fn write_uniform_image(dir: &Path, name: &str, level: u8) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(320, 240, Rgb([level, level, level]))
        .save(&path)
        .unwrap();
    path
}

fn analyzer(output_dir: &Path, dry_run: bool) -> SoilAnalyzer {
    SoilAnalyzer::new(AnalysisConfig {
        output_dir: output_dir.to_path_buf(),
        verbose: false,
        dry_run,
    })
}

#[test]
fn dry_soil_photo_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("solutions");
    // 120 / 255 = 0.47
    let image = write_uniform_image(dir.path(), "Dry4.png", 120);

    let analysis = analyzer(&output_dir, false).run(&image).unwrap();

    assert_eq!(
        analysis.classification.condition(),
        Some(SoilCondition::DrySoil)
    );
    let report = output_dir.join("Dry_Soil.txt");
    assert_eq!(analysis.report_path.as_deref(), Some(report.as_path()));
    assert_eq!(
        fs::read_to_string(&report).unwrap(),
        format!(
            "Soil Condition: Dry Soil\nPreventive Measures:\n{}\n",
            advisory::lookup("Dry Soil")
        )
    );
}

#[test]
fn bright_photo_is_flooded() {
    let dir = tempfile::tempdir().unwrap();
    let image = write_uniform_image(dir.path(), "bright.png", 200);

    let analysis = analyzer(dir.path(), false).run(&image).unwrap();

    assert_eq!(analysis.label(), "Flooded Soil");
    assert!(dir.path().join("Flooded_Soil.txt").is_file());
}

#[test]
fn gap_intensity_is_reported_as_unclassified() {
    let dir = tempfile::tempdir().unwrap();
    // 70 / 255 = 0.2745, between Wet and Moist
    let image = write_uniform_image(dir.path(), "gap.png", 70);

    let analysis = analyzer(dir.path(), false).run(&image).unwrap();

    assert!(!analysis.classification.is_classified());
    assert_eq!(analysis.advisory, advisory::NO_ADVISORY);
    assert_eq!(
        fs::read_to_string(dir.path().join("Unclassified.txt")).unwrap(),
        "Soil Condition: Unclassified\nPreventive Measures:\nNo preventive measures available.\n"
    );
}

#[test]
fn missing_image_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("solutions");

    let result = analyzer(&output_dir, false).run(&dir.path().join("nope.jpg"));

    assert!(matches!(result, Err(SoilError::ImageNotFound { .. })));
    assert!(!output_dir.exists());
}

#[test]
fn dry_run_classifies_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("solutions");
    let image = write_uniform_image(dir.path(), "wet.png", 30);

    let analysis = analyzer(&output_dir, true).run(&image).unwrap();

    assert_eq!(analysis.classification.condition(), Some(SoilCondition::Wet));
    assert!(analysis.report_path.is_none());
    assert!(!output_dir.exists());
}

#[test]
fn rerun_overwrites_identically() {
    let dir = tempfile::tempdir().unwrap();
    let image = write_uniform_image(dir.path(), "moist.png", 95);
    let analyzer = analyzer(dir.path(), false);

    let first = analyzer.run(&image).unwrap();
    let first_contents = fs::read_to_string(first.report_path.as_ref().unwrap()).unwrap();
    let second = analyzer.run(&image).unwrap();
    let second_contents = fs::read_to_string(second.report_path.as_ref().unwrap()).unwrap();

    assert_eq!(first.label(), "Moist");
    assert_eq!(first.report_path, second.report_path);
    assert_eq!(first_contents, second_contents);
}
