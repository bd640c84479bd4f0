//! Format path contents outcomes and report summaries as text.

use crate::contents::Node;
use crate::resolver::Outcome;
use crate::service::ReportSummary;
use crate::types::Totals;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{CellAlignment, Table};
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a path contents outcome as human-readable text.
pub fn format_outcome_text(path: &str, outcome: &Outcome) -> String {
    let mut out = String::new();
    let shown = if path.is_empty() { "/" } else { path };
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Path contents: {}", shown))
    ));

    let results = match outcome {
        Outcome::PathContents { results } => results,
        other => {
            out.push_str(&format!("{}: {}\n", other.kind(), other.message().unwrap_or("")));
            return out;
        }
    };

    if results.is_empty() {
        out.push_str("No coverage data.\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Type", "Name", "Hits", "Misses", "Partials", "Lines", "Coverage", "Critical",
    ]);
    for node in results {
        table.add_row(node_row(node));
    }
    for index in 2..=6 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    out.push_str(&format!("{}\n\n", table));

    let totals: Totals = results.iter().map(Node::totals).sum();
    let dirs = results.iter().filter(|n| n.is_dir()).count();
    out.push_str(&format!(
        "Total: {} directories, {} files, {} of {} lines hit ({}).\n",
        dirs,
        results.len() - dirs,
        totals.hits,
        totals.lines,
        format_percent(totals.percent_covered())
    ));
    out
}

fn node_row(node: &Node) -> Vec<String> {
    let totals = node.totals();
    let (kind, name) = if node.is_dir() {
        ("dir", format!("{}/", node.name()))
    } else {
        ("file", node.name().to_string())
    };
    let critical = match node.is_critical_file() {
        Some(true) => "yes",
        Some(false) => "",
        None => "-",
    };
    vec![
        kind.to_string(),
        if node.is_dir() { name } else { node.path().to_string() },
        totals.hits.to_string(),
        totals.misses.to_string(),
        totals.partials.to_string(),
        totals.lines.to_string(),
        format_percent(node.percent_covered()),
        critical.to_string(),
    ]
}

/// Format whole-report totals; `None` means there is no report for the commit.
pub fn format_summary_text(commit: &str, summary: Option<&ReportSummary>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Report: {}", commit))
    ));
    let Some(summary) = summary else {
        out.push_str("Missing head report\n");
        return out;
    };
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Files", "Hits", "Misses", "Partials", "Lines", "Coverage"]);
    let totals = summary.totals;
    table.add_row(vec![
        summary.files.to_string(),
        totals.hits.to_string(),
        totals.misses.to_string(),
        totals.partials.to_string(),
        totals.lines.to_string(),
        format_percent(totals.percent_covered()),
    ]);
    out.push_str(&format!("{}\n", table));
    out
}
