//! Import command - build and write the destinations document.

use std::path::PathBuf;

use colored::Colorize;

use super::check::print_issues;
use super::build_pipeline;
use crate::cli::SourceArgs;

pub fn run(
    source: SourceArgs,
    output: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !source.input.exists() {
        return Err(format!("CSV file not found: {}", source.input.display()).into());
    }

    println!(
        "{} {}",
        "Importing".cyan().bold(),
        source.input.display().to_string().white()
    );

    let pipeline = build_pipeline(&source)?;
    let result = pipeline.run(&source.input, &output)?;

    if result.summary.records_dropped > 0 {
        println!(
            "Skipped {} rows without a city",
            result.summary.records_dropped.to_string().yellow()
        );
    }

    print_issues(&result.issues, &result.summary.issues, verbose);

    println!();
    println!(
        "{} {} destinations to {}",
        "Wrote".green().bold(),
        result.records.len().to_string().white().bold(),
        output.display().to_string().white()
    );

    Ok(())
}
