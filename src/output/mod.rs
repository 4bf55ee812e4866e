// mod.rs - Output formatters for posterior tables

use crate::core::PosteriorTable;
use serde_json::json;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Supported output formats for the posterior table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: tsv, csv, json", s)),
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

/// Write the posterior table as a delimited text file
fn write_delimited(
    file_path: &str,
    posteriors: &PosteriorTable,
    command_line: &str,
    separator: char,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);
    let werr = |e: std::io::Error| format!("Write error: {}", e);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(werr)?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(werr)?;
    writeln!(writer, "# pedprob v{}", env!("CARGO_PKG_VERSION")).map_err(werr)?;

    // Write header
    let header = ["individual", "gene_0", "gene_1", "gene_2", "trait_true", "trait_false"];
    writeln!(writer, "{}", header.join(&separator.to_string())).map_err(werr)?;

    // Write one row per individual
    for (name, entry) in posteriors.iter() {
        write!(writer, "{}", name).map_err(werr)?;
        for p in entry.gene.iter().chain(entry.trait_dist.iter()) {
            write!(writer, "{}{:.6}", separator, p).map_err(werr)?;
        }
        writeln!(writer).map_err(werr)?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Posterior table written to: {}", file_path);
    Ok(())
}

/// Write the posterior table in TSV format
pub fn write_tsv(
    file_path: &str,
    posteriors: &PosteriorTable,
    command_line: &str,
) -> Result<(), String> {
    write_delimited(file_path, posteriors, command_line, '\t')
}

/// Write the posterior table in CSV format
pub fn write_csv(
    file_path: &str,
    posteriors: &PosteriorTable,
    command_line: &str,
) -> Result<(), String> {
    write_delimited(file_path, posteriors, command_line, ',')
}

/// Build the JSON view: per individual, gene distribution keyed by copy
/// count and trait distribution keyed by true/false.
pub fn posteriors_to_json(posteriors: &PosteriorTable) -> serde_json::Value {
    let mut people = serde_json::Map::new();
    for (name, entry) in posteriors.iter() {
        people.insert(
            name.to_string(),
            json!({
                "gene": {
                    "0": entry.gene[0],
                    "1": entry.gene[1],
                    "2": entry.gene[2],
                },
                "trait": {
                    "true": entry.trait_dist[0],
                    "false": entry.trait_dist[1],
                },
            }),
        );
    }
    serde_json::Value::Object(people)
}

/// Write the posterior table in JSON format
pub fn write_json(
    file_path: &str,
    posteriors: &PosteriorTable,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let document = json!({
        "command": command_line,
        "generated": chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        "version": env!("CARGO_PKG_VERSION"),
        "posteriors": posteriors_to_json(posteriors),
    });
    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("Failed to serialize posteriors: {}", e))?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    println!("✅ Posterior table written to: {}", file_path);
    Ok(())
}

/// Write the posterior table in the specified format
pub fn write_results(
    file_path: &str,
    format: OutputFormat,
    posteriors: &PosteriorTable,
    command_line: &str,
) -> Result<(), String> {
    match format {
        OutputFormat::Tsv => write_tsv(file_path, posteriors, command_line),
        OutputFormat::Csv => write_csv(file_path, posteriors, command_line),
        OutputFormat::Json => write_json(file_path, posteriors, command_line),
    }
}

/// Render the indented per-person console report
pub fn format_report(posteriors: &PosteriorTable, precision: usize) -> String {
    let mut report = String::new();
    for (name, entry) in posteriors.iter() {
        report.push_str(&format!("{}:\n", name));
        report.push_str("  Gene:\n");
        for copies in (0..3).rev() {
            report.push_str(&format!(
                "    {}: {:.prec$}\n",
                copies,
                entry.gene[copies],
                prec = precision
            ));
        }
        report.push_str("  Trait:\n");
        report.push_str(&format!(
            "    True: {:.prec$}\n",
            entry.trait_dist[0],
            prec = precision
        ));
        report.push_str(&format!(
            "    False: {:.prec$}\n",
            entry.trait_dist[1],
            prec = precision
        ));
    }
    report
}

/// Print the console report
pub fn print_report(posteriors: &PosteriorTable, precision: usize) {
    print!("{}", format_report(posteriors, precision));
}
