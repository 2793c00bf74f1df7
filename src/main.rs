use anyhow::Result;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use std::time::Instant;

use soil_scanner::cli::Args;
use soil_scanner::gui;
use soil_scanner::json_output::JsonMessage;
use soil_scanner::soil_analysis::{
    exit_status, summary, SoilAnalysis, SoilAnalyzer, ANALYSIS_SIZE, EXIT_FAILURE,
};
use soil_scanner::utils::{
    create_spinner, error_println, format_duration, verbose_println, warn_println,
};

fn print_configuration(args: &Args) {
    println!("{}", style("Configuration:").bold());
    if let Some(ref input) = args.input_path {
        println!("  Input image: {}", input.display());
    }
    println!("  Analysis size: {}x{}", ANALYSIS_SIZE, ANALYSIS_SIZE);
    println!("  Output directory: {}", args.output_dir().display());
    println!(
        "  Image viewer: {}",
        if !args.show_display() {
            "disabled"
        } else if gui::is_available() {
            "enabled"
        } else {
            "not available (built without gui feature)"
        }
    );
    if args.dry_run {
        println!("  Dry run mode: enabled (no report will be written)");
    }
    println!();
}

fn print_analysis(analysis: &SoilAnalysis) {
    println!(
        "Average Intensity: {}",
        style(format!("{:.3}", analysis.mean_intensity())).bold()
    );

    if analysis.classification.is_classified() {
        println!(
            "Predicted Soil Condition: {}",
            style(analysis.label()).bold().green()
        );
    } else {
        warn_println(&format!(
            "Mean intensity {:.4} does not fall within any soil condition range",
            analysis.mean_intensity()
        ));
        println!(
            "Predicted Soil Condition: {}",
            style(analysis.label()).bold().yellow()
        );
    }

    println!();
    println!("{}", style("Preventive Measures:").bold().blue());
    for line in analysis.advisory.lines() {
        println!("  {}", line.trim_end());
    }
    println!();

    match analysis.report_path {
        Some(ref path) => println!(
            "Preventive measures written to {}",
            style(path.display()).cyan()
        ),
        None => println!("{}", style("Dry run: no report written").dim()),
    }
    println!();
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let start_time = Instant::now();

    let mut args = Args::parse();
    args.load_and_merge_config()?;

    if args.list_conditions {
        summary::print_conditions();
        return Ok(ExitCode::SUCCESS);
    }

    let input_path = args.require_input()?;

    if !args.json {
        println!("{}", style("Soil Scanner").bold().blue());
        println!("{}", style("Soil condition estimate from image intensity").dim());
        println!();
        if args.verbose {
            print_configuration(&args);
        }
    }

    let analyzer = SoilAnalyzer::new(args.analysis_config());

    let spinner =
        (!args.json && !args.verbose).then(|| create_spinner("Analyzing soil image..."));
    let result = analyzer.run(&input_path);
    if let Some(ref spinner) = spinner {
        spinner.finish_and_clear();
    }

    let analysis = match result {
        Ok(analysis) => analysis,
        Err(e) => {
            log::debug!("Analysis of {} failed: {:?}", input_path.display(), e);
            if args.json {
                JsonMessage::failed(&input_path, e.to_string()).emit();
            } else {
                error_println(&e.to_string());
            }
            return Ok(ExitCode::from(EXIT_FAILURE));
        }
    };

    if args.json {
        JsonMessage::from_analysis(&analysis).emit();
    } else {
        print_analysis(&analysis);
        summary::print_analysis(&analysis);
        println!();
        verbose_println(
            args.verbose,
            &format!("Total time: {}", format_duration(start_time.elapsed())),
        );
    }

    if args.show_display() {
        verbose_println(args.verbose, "Opening image viewer (close the window to continue)");
        gui::display_results(&analysis)?;
    }

    Ok(ExitCode::from(exit_status(&analysis.classification)))
}
