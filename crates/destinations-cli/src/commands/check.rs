//! Check command - build records and report issues without writing.

use colored::Colorize;
use destinations::{Issue, IssueCounts};

use super::build_pipeline;
use crate::cli::SourceArgs;

pub fn run(source: SourceArgs, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !source.input.exists() {
        return Err(format!("CSV file not found: {}", source.input.display()).into());
    }

    let pipeline = build_pipeline(&source)?;
    let result = pipeline.process(&source.input)?;

    if json {
        let report = serde_json::json!({
            "source": result.source,
            "summary": result.summary,
            "issues": result.issues,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let summary = &result.summary;
    println!(
        "{} {} ({} layout)",
        "Checked".cyan().bold(),
        result.source.file.white(),
        summary.schema_version
    );
    println!(
        "  {:18} {}",
        "Rows read:",
        summary.rows_read.to_string().white().bold()
    );
    println!(
        "  {:18} {}",
        "Records kept:",
        summary.records_kept.to_string().green()
    );
    println!(
        "  {:18} {}",
        "Rows without city:",
        summary.records_dropped.to_string().yellow()
    );

    if !summary.missing_fields.is_empty() {
        let names: Vec<&str> = summary
            .missing_fields
            .iter()
            .map(|f| f.output_name())
            .collect();
        println!(
            "  {:18} {}",
            "Unmapped columns:",
            names.join(", ").dimmed()
        );
    }

    print_issues(&result.issues, &summary.issues, verbose);

    Ok(())
}

/// Print issue counts, and every issue when verbose.
pub(crate) fn print_issues(issues: &[Issue], counts: &IssueCounts, verbose: bool) {
    println!();
    if counts.total() == 0 {
        println!("{}", "No issues found - data looks clean!".green());
        return;
    }

    println!(
        "Found {} issues ({} malformed, {} missing, {} placeholder, {} unmapped codes, {} duplicate ids)",
        counts.total().to_string().white().bold(),
        counts.malformed.to_string().red(),
        counts.missing.to_string().yellow(),
        counts.placeholder.to_string().yellow(),
        counts.unmapped_code.to_string().blue(),
        counts.duplicate_id.to_string().red()
    );

    if verbose {
        for issue in issues {
            println!("  - [{}] {}", issue.kind.label().dimmed(), issue);
        }
    } else {
        println!("Run with {} to list them", "--verbose".cyan());
    }
}
