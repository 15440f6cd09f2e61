//! Terminal rendering of the view model

use vtu_sgpa_common::view::SUBJECT_COLUMNS;
use vtu_sgpa_common::{ResultsView, SubjectRow};

/// Results section as plain text: header, subject table, summary
pub fn results_to_text(results: &ResultsView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Scheme: {}   Branch: {}   {}\n\n",
        results.scheme, results.branch, results.sgpa_label
    ));
    out.push_str(&subject_table(&results.rows));
    out.push('\n');
    out.push_str(&format!(
        "Total Subjects: {}   Passed: {}   Total Credits: {}   Credit Points: {}\n",
        results.summary.total_subjects,
        results.summary.passed_subjects,
        results.summary.total_credits,
        results.summary.total_credit_points
    ));
    out
}

pub fn subject_table(rows: &[SubjectRow]) -> String {
    let mut widths: Vec<usize> = SUBJECT_COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&table_line(SUBJECT_COLUMNS.iter().copied(), &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&table_line(rule.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&table_line(row.cells.iter().map(String::as_str), &widths));
    }
    out
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    format!("{}\n", line.join("  ").trim_end())
}
