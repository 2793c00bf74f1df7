use image::{ImageBuffer, Luma};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Single-channel buffer with intensities normalized to `[0, 1]`
pub type GrayF32Image = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Label used when the mean intensity falls between the defined ranges
pub const UNCLASSIFIED_LABEL: &str = "Unclassified";

/// Process exit status for a run that matched a condition
pub const EXIT_CLASSIFIED: u8 = 0;
/// Process exit status when the image could not be analyzed or the report not written
pub const EXIT_FAILURE: u8 = 1;
/// Process exit status when the mean matched none of the condition ranges
pub const EXIT_UNCLASSIFIED: u8 = 2;

// Range bounds, checked in the order below. The gaps between them are real:
// (0.25, 0.30), (0.599, 0.60) and (0.68, 0.69] match nothing.
const FLOODED_ABOVE: f64 = 0.69;
const SAND_RANGE: (f64, f64) = (0.60, 0.68);
const ALKALINE_RANGE: (f64, f64) = (0.50, 0.599);
const DRY_RANGE: (f64, f64) = (0.45, 0.50);
const MOIST_RANGE: (f64, f64) = (0.30, 0.45);
const WET_AT_MOST: f64 = 0.25;

/// The six soil conditions the analyzer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum SoilCondition {
    #[strum(to_string = "Flooded Soil")]
    FloodedSoil,
    #[strum(to_string = "Sand Soil")]
    SandSoil,
    #[strum(to_string = "Alkaline Soil")]
    AlkalineSoil,
    #[strum(to_string = "Dry Soil")]
    DrySoil,
    #[strum(to_string = "Moist")]
    Moist,
    #[strum(to_string = "Wet")]
    Wet,
}

impl SoilCondition {
    /// Label as written in reports, e.g. `Dry Soil`
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Human readable description of the intensity range, used by `--list-conditions`
    pub fn range_description(&self) -> &'static str {
        match self {
            SoilCondition::FloodedSoil => "mean > 0.69",
            SoilCondition::SandSoil => "0.60 <= mean <= 0.68",
            SoilCondition::AlkalineSoil => "0.50 <= mean <= 0.599",
            SoilCondition::DrySoil => "0.45 <= mean <= 0.50",
            SoilCondition::Moist => "0.30 <= mean <= 0.45",
            SoilCondition::Wet => "mean <= 0.25",
        }
    }
}

/// Outcome of classifying one mean intensity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Classified { condition: SoilCondition, mean: f64 },
    /// The mean fell into one of the gaps between ranges (or was NaN)
    Unclassified { mean: f64 },
}

impl Classification {
    pub fn mean(&self) -> f64 {
        match self {
            Classification::Classified { mean, .. } | Classification::Unclassified { mean } => {
                *mean
            }
        }
    }

    pub fn condition(&self) -> Option<SoilCondition> {
        match self {
            Classification::Classified { condition, .. } => Some(*condition),
            Classification::Unclassified { .. } => None,
        }
    }

    /// Label written to reports and window titles
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Classified { condition, .. } => condition.label(),
            Classification::Unclassified { .. } => UNCLASSIFIED_LABEL,
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, Classification::Classified { .. })
    }
}

/// Exit status for a completed analysis
pub fn exit_status(classification: &Classification) -> u8 {
    if classification.is_classified() {
        EXIT_CLASSIFIED
    } else {
        EXIT_UNCLASSIFIED
    }
}

fn within(value: f64, (low, high): (f64, f64)) -> bool {
    low <= value && value <= high
}

/// Map a mean intensity to a soil condition.
///
/// Checks run in a fixed order and the first match wins, so a shared bound
/// such as 0.50 belongs to the earlier range (Alkaline Soil, not Dry Soil).
pub fn classify_mean(mean: f64) -> Classification {
    let condition = if mean > FLOODED_ABOVE {
        Some(SoilCondition::FloodedSoil)
    } else if within(mean, SAND_RANGE) {
        Some(SoilCondition::SandSoil)
    } else if within(mean, ALKALINE_RANGE) {
        Some(SoilCondition::AlkalineSoil)
    } else if within(mean, DRY_RANGE) {
        Some(SoilCondition::DrySoil)
    } else if within(mean, MOIST_RANGE) {
        Some(SoilCondition::Moist)
    } else if mean <= WET_AT_MOST {
        Some(SoilCondition::Wet)
    } else {
        None
    };

    match condition {
        Some(condition) => Classification::Classified { condition, mean },
        None => Classification::Unclassified { mean },
    }
}

/// Arithmetic mean over every pixel of a normalized grayscale buffer.
///
/// Accumulates in `f64` so a 500x500 buffer doesn't drift. An empty buffer
/// yields NaN, which classifies as unclassified.
pub fn mean_intensity(gray: &GrayF32Image) -> f64 {
    let count = gray.as_raw().len();
    if count == 0 {
        return f64::NAN;
    }
    let sum: f64 = gray.as_raw().iter().map(|&v| v as f64).sum();
    sum / count as f64
}

/// Compute the mean of `gray` and classify it
pub fn analyze_soil_condition(gray: &GrayF32Image) -> Classification {
    let mean = mean_intensity(gray);
    log::info!("Average Intensity: {:.3}", mean);

    let classification = classify_mean(mean);
    if !classification.is_classified() {
        log::warn!(
            "Mean intensity {:.4} falls between the defined soil ranges",
            mean
        );
    }
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn condition_of(mean: f64) -> Option<SoilCondition> {
        classify_mean(mean).condition()
    }

    #[test]
    fn test_each_range_interior() {
        assert_eq!(condition_of(0.85), Some(SoilCondition::FloodedSoil));
        assert_eq!(condition_of(0.64), Some(SoilCondition::SandSoil));
        assert_eq!(condition_of(0.55), Some(SoilCondition::AlkalineSoil));
        assert_eq!(condition_of(0.47), Some(SoilCondition::DrySoil));
        assert_eq!(condition_of(0.37), Some(SoilCondition::Moist));
        assert_eq!(condition_of(0.10), Some(SoilCondition::Wet));
    }

    #[test]
    fn test_flooded_boundary() {
        // 0.69 itself is not flooded and sits above the sand range
        assert_eq!(condition_of(0.69), None);
        assert_eq!(condition_of(0.6901), Some(SoilCondition::FloodedSoil));
    }

    #[test]
    fn test_sand_boundaries() {
        assert_eq!(condition_of(0.68), Some(SoilCondition::SandSoil));
        assert_eq!(condition_of(0.6801), None);
        assert_eq!(condition_of(0.60), Some(SoilCondition::SandSoil));
        assert_eq!(condition_of(0.5999), None);
    }

    #[test]
    fn test_alkaline_boundaries() {
        assert_eq!(condition_of(0.599), Some(SoilCondition::AlkalineSoil));
        assert_eq!(condition_of(0.5991), None);
        assert_eq!(condition_of(0.50), Some(SoilCondition::AlkalineSoil));
        assert_eq!(condition_of(0.4999), Some(SoilCondition::DrySoil));
    }

    #[test]
    fn test_dry_and_moist_boundaries() {
        assert_eq!(condition_of(0.45), Some(SoilCondition::DrySoil));
        assert_eq!(condition_of(0.4499), Some(SoilCondition::Moist));
        assert_eq!(condition_of(0.30), Some(SoilCondition::Moist));
        assert_eq!(condition_of(0.2999), None);
    }

    #[test]
    fn test_wet_boundary() {
        assert_eq!(condition_of(0.25), Some(SoilCondition::Wet));
        assert_eq!(condition_of(0.2501), None);
        assert_eq!(condition_of(0.0), Some(SoilCondition::Wet));
    }

    #[test]
    fn test_gaps_are_unclassified() {
        for mean in [0.27, 0.5995, 0.685, 0.69] {
            let result = classify_mean(mean);
            assert_eq!(result, Classification::Unclassified { mean });
            assert_eq!(result.label(), UNCLASSIFIED_LABEL);
        }
    }

    #[test]
    fn test_nan_is_unclassified() {
        assert!(!classify_mean(f64::NAN).is_classified());
    }

    #[test]
    fn test_exit_status_follows_classification() {
        assert_eq!(exit_status(&classify_mean(0.47)), EXIT_CLASSIFIED);
        assert_eq!(exit_status(&classify_mean(0.85)), EXIT_CLASSIFIED);
        assert_eq!(exit_status(&classify_mean(0.27)), EXIT_UNCLASSIFIED);
        assert_eq!(exit_status(&classify_mean(0.69)), EXIT_UNCLASSIFIED);
        assert_eq!(exit_status(&classify_mean(f64::NAN)), EXIT_UNCLASSIFIED);
        assert_ne!(EXIT_FAILURE, EXIT_CLASSIFIED);
        assert_ne!(EXIT_FAILURE, EXIT_UNCLASSIFIED);
    }

    #[test]
    fn test_labels_round_trip_through_strum() {
        let labels: Vec<String> = SoilCondition::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Flooded Soil",
                "Sand Soil",
                "Alkaline Soil",
                "Dry Soil",
                "Moist",
                "Wet"
            ]
        );
        assert_eq!(
            SoilCondition::from_str("Dry Soil").unwrap(),
            SoilCondition::DrySoil
        );
        assert!(SoilCondition::from_str(UNCLASSIFIED_LABEL).is_err());
    }

    #[test]
    fn test_mean_intensity_of_uniform_buffer() {
        let gray = GrayF32Image::from_pixel(10, 10, Luma([0.4]));
        assert!((mean_intensity(&gray) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_mean_intensity_of_split_buffer() {
        let gray = GrayF32Image::from_fn(10, 10, |x, _| Luma([if x < 5 { 0.0 } else { 1.0 }]));
        assert!((mean_intensity(&gray) - 0.5).abs() < 1e-9);
        assert_eq!(
            analyze_soil_condition(&gray).condition(),
            Some(SoilCondition::AlkalineSoil)
        );
    }

    #[test]
    fn test_mean_intensity_of_empty_buffer() {
        let gray = GrayF32Image::new(0, 0);
        assert!(mean_intensity(&gray).is_nan());
    }
}
