//! Result rendering for stdout

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A command result that can be printed as a table or as JSON
pub trait Report: Serialize {
    /// Human-readable rendering
    fn render_table(&self) -> String;
}

/// Write `report` to stdout in the requested format
pub fn emit<R: Report>(format: OutputFormat, report: &R) -> Result<()> {
    let text = render(format, report)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text).context("failed to write to stdout")?;
    Ok(())
}

/// Render `report` without printing it
pub fn render<R: Report>(format: OutputFormat, report: &R) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report.render_table()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("failed to serialise report")?;
            Ok(json)
        }
    }
}

/// Box-drawn two-column table
pub fn key_value_table(title: &str, rows: &[(&str, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0).max(10);
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count().saturating_sub(key_width + 3))
        .max(10);

    let mut out = String::new();
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}\n",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    out.push_str(&rule("┌", "─", "┐"));
    out.push_str(&format!(
        "│ {:<width$} │\n",
        title,
        width = key_width + value_width + 3
    ));
    out.push_str(&rule("├", "┬", "┤"));
    for (key, value) in rows {
        out.push_str(&format!(
            "│ {:<kw$} │ {:>vw$} │\n",
            key,
            value,
            kw = key_width,
            vw = value_width
        ));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
