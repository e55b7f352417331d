//! Output formatters for probe reports

use anyhow::Result;
use colored::*;
use sheetprobe_core::check::ColumnCheck;
use sheetprobe_core::reader::Dataset;
use sheetprobe_core::{LoaderKind, ProbeError, Report};
use std::fmt::{self, Write};
use std::path::Path;

/// Print a probe outcome in human-readable format
pub fn print_human(file_path: &Path, outcome: &Result<Report, ProbeError>) {
    print!("{}", render_human(file_path, outcome));
}

pub fn render_human(file_path: &Path, outcome: &Result<Report, ProbeError>) -> String {
    let mut out = String::new();
    match write_outcome(&mut out, file_path, outcome) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

fn write_outcome(
    out: &mut String,
    file_path: &Path,
    outcome: &Result<Report, ProbeError>,
) -> fmt::Result {
    match outcome {
        Ok(report) => write_report(out, file_path, report),
        Err(err) if err.is_not_found() => {
            writeln!(out, "{}", format!("❌ {}", err).red().bold())
        }
        Err(err) => writeln!(
            out,
            "{}",
            format!("❌ Error processing file: {}", err).red().bold()
        ),
    }
}

fn write_report(out: &mut String, file_path: &Path, report: &Report) -> fmt::Result {
    let dataset = &report.dataset;
    writeln!(out, "{}", format!("📊 File: {}", file_path.display()).bold())?;
    writeln!(
        out,
        "📏 Dimensions: {} rows x {} columns",
        dataset.shape.rows, dataset.shape.columns
    )?;
    writeln!(out, "📋 Columns found:")?;
    for (index, column) in dataset.columns.iter().enumerate() {
        writeln!(out, "  {:2}: {}", index, column)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("🔍 Required columns check ({}):", report.profile).bold()
    )?;
    write_check(out, &report.check, |_| String::new())?;

    if report.all_found() {
        writeln!(out)?;
        writeln!(out, "{}", "✅ All required columns found!".green().bold())?;
    } else {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            format!(
                "❌ Required columns not found: [{}]",
                report.check.missing.join(", ")
            )
            .red()
        )?;
        writeln!(out, "💡 Mapping suggestions:")?;
        for suggestion in &report.suggestions {
            writeln!(
                out,
                "  '{}' -> {}",
                suggestion.column,
                suggestion.target.yellow()
            )?;
        }
    }

    if let Some(mapping) = &report.mapping {
        writeln!(out)?;
        writeln!(out, "{}", "🧭 Column mapping:".bold())?;
        for m in &mapping.columns {
            writeln!(
                out,
                "  {} -> {} (position {})",
                m.column,
                m.key.cyan(),
                m.position
            )?;
        }
        writeln!(out, "{}", "🔍 Mapped required columns:".bold())?;
        write_check(out, &mapping.check, |position| {
            format!(" (position {})", position)
        })?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("📄 First {} rows:", dataset.limits.rows).bold()
    )?;
    match dataset.loader {
        LoaderKind::Table => write_table_preview(out, dataset),
        LoaderKind::Cells => {
            for row in &dataset.preview {
                writeln!(out, "  Row {}: {}", row.label, row.cells.join(" | "))?;
            }
            Ok(())
        }
    }
}

fn write_check(
    out: &mut String,
    check: &ColumnCheck,
    found_suffix: impl Fn(usize) -> String,
) -> fmt::Result {
    for required in &check.required {
        match required.position {
            Some(position) => {
                writeln!(
                    out,
                    "  {}{}",
                    format!("✅ {}", required.name).green(),
                    found_suffix(position)
                )?;
            }
            None => {
                writeln!(out, "  {}", format!("❌ {} - MISSING", required.name).red())?;
            }
        }
    }
    Ok(())
}

/// Aligned grid with a leading row index, values right-aligned under their labels
fn write_table_preview(out: &mut String, dataset: &Dataset) -> fmt::Result {
    if dataset.preview.is_empty() {
        writeln!(out, "Empty table")?;
        writeln!(out, "Columns: [{}]", dataset.columns.join(", "))?;
        return Ok(());
    }

    let visible = dataset
        .preview
        .iter()
        .map(|row| row.cells.len())
        .max()
        .unwrap_or(0);
    let labels: Vec<&str> = dataset
        .columns
        .iter()
        .take(visible)
        .map(String::as_str)
        .collect();

    let index_width = dataset
        .preview
        .iter()
        .map(|row| row.label.to_string().len())
        .max()
        .unwrap_or(1);
    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(col, label)| {
            dataset
                .preview
                .iter()
                .filter_map(|row| row.cells.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut line = " ".repeat(index_width);
    for (label, width) in labels.iter().zip(&widths) {
        write!(line, "  {:>width$}", label, width = *width)?;
    }
    writeln!(out, "{}", line.trim_end())?;

    for row in &dataset.preview {
        let mut line = format!("{:<width$}", row.label, width = index_width);
        for (col, width) in widths.iter().enumerate() {
            let cell = row.cells.get(col).map(String::as_str).unwrap_or("");
            write!(line, "  {:>width$}", cell, width = *width)?;
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Print a probe outcome in JSON format
pub fn print_json(file_path: &Path, outcome: &Result<Report, ProbeError>) -> Result<()> {
    let output = render_json(file_path, outcome)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn render_json(
    file_path: &Path,
    outcome: &Result<Report, ProbeError>,
) -> Result<serde_json::Value> {
    let file = file_path.display().to_string();
    let output = match outcome {
        Ok(report) => serde_json::json!({
            "file": file,
            "report": serde_json::to_value(report)?,
        }),
        Err(err) => serde_json::json!({
            "file": file,
            "error": err.to_string(),
        }),
    };
    Ok(output)
}
