//! Formatted tables for the end of a run and for `--list-conditions`.

use prettytable::{format, Cell, Row, Table};
use strum::IntoEnumIterator;

use super::classify::{SoilCondition, UNCLASSIFIED_LABEL};
use super::{SoilAnalysis, ANALYSIS_SIZE};

/// Intensity ranges that belong to no condition
const GAP_RANGES: [&str; 3] = [
    "0.25 < mean < 0.30",
    "0.599 < mean < 0.60",
    "0.68 < mean <= 0.69",
];

/// One-row table describing a finished analysis
pub fn analysis_table(analysis: &SoilAnalysis) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(vec![
        Cell::new("Input"),
        Cell::new("Analyzed"),
        Cell::new("Mean"),
        Cell::new("Condition"),
        Cell::new("Report"),
    ]));

    let input = analysis
        .input_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");
    let report = analysis
        .report_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    table.add_row(Row::new(vec![
        Cell::new(input),
        Cell::new(&format!("{}x{}", ANALYSIS_SIZE, ANALYSIS_SIZE)),
        Cell::new(&format!("{:.3}", analysis.mean_intensity())),
        Cell::new(analysis.label()),
        Cell::new(&report),
    ]));

    table
}

/// Table of every condition with its intensity range, gaps included
pub fn condition_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(vec![Cell::new("Condition"), Cell::new("Range")]));
    for condition in SoilCondition::iter() {
        table.add_row(Row::new(vec![
            Cell::new(condition.label()),
            Cell::new(condition.range_description()),
        ]));
    }
    for gap in GAP_RANGES {
        table.add_row(Row::new(vec![
            Cell::new(UNCLASSIFIED_LABEL),
            Cell::new(gap),
        ]));
    }

    table
}

pub fn print_analysis(analysis: &SoilAnalysis) {
    analysis_table(analysis).printstd();
}

pub fn print_conditions() {
    condition_table().printstd();
}
