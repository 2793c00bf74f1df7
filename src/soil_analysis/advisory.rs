use std::str::FromStr;

use super::classify::SoilCondition;

/// Returned for any label without an entry in the advisory table
pub const NO_ADVISORY: &str = "No preventive measures available.";

const FLOODED_SOIL: &str = "Prevent flooding by improving drainage systems. Consider installing French drains or surface drains to redirect excess water. \n\
Ensure the soil has good aeration to avoid root rot. \nRegularly monitor water levels and avoid over-irrigation.";

const SAND_SOIL: &str = "Improve moisture retention by adding organic compost or mulch to the soil.\nConsider mixing in loamy soil for better structure. \n\
Regular watering and adding fertilizers is essential as sandy soil leaches nutrients quickly.";

const ALKALINE_SOIL: &str = "Add sulfur or organic materials like peat moss to reduce pH levels.\nThis helps make the soil more acidic for better plant growth. \n\
Test the pH regularly to avoid drastic changes, which could harm plant roots.";

const DRY_SOIL: &str = "Increase irrigation frequency, and use drip irrigation to ensure water reaches plant roots. \n\
Add organic matter to improve moisture retention. \n\
Monitor soil moisture to avoid both overwatering and underwatering.";

const MOIST: &str = "Ensure proper drainage to avoid waterlogging.\nIf necessary, improve soil texture with organic compost to maintain optimal moisture levels. \n\
Check moisture regularly and adjust watering accordingly.";

const WET: &str = "Improve drainage by incorporating sand or organic matter, and consider creating raised beds.\nAvoid over-irrigating and ensure proper air circulation around plant roots. \n\
Refrain from tilling the soil when wet to prevent compaction.";

/// Remediation text for every condition, one entry per variant
pub static ADVISORY_TABLE: [(SoilCondition, &str); 6] = [
    (SoilCondition::FloodedSoil, FLOODED_SOIL),
    (SoilCondition::SandSoil, SAND_SOIL),
    (SoilCondition::AlkalineSoil, ALKALINE_SOIL),
    (SoilCondition::DrySoil, DRY_SOIL),
    (SoilCondition::Moist, MOIST),
    (SoilCondition::Wet, WET),
];

impl SoilCondition {
    pub fn preventive_measures(&self) -> &'static str {
        ADVISORY_TABLE
            .iter()
            .find(|(condition, _)| condition == self)
            .map(|(_, text)| *text)
            .unwrap_or(NO_ADVISORY)
    }
}

/// Look up the advisory text for a label. Total: unknown labels get [`NO_ADVISORY`].
pub fn lookup(label: &str) -> &'static str {
    SoilCondition::from_str(label)
        .map(|condition| condition.preventive_measures())
        .unwrap_or(NO_ADVISORY)
}
