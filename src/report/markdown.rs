//! Markdown rendering for PR comments.

use super::number::{format_delta, format_percentage, group_thousands};
use super::selection::{summary_diffs, summary_title};
use crate::diff::{DiffProgram, Variation};

/// Column alignment in a Markdown table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Separator row pattern for this alignment.
    pub fn pattern(&self) -> &'static str {
        match self {
            TextAlign::Left => ":-",
            TextAlign::Right => "-:",
            TextAlign::Center => ":-:",
        }
    }
}

struct Column {
    title: &'static str,
    align: TextAlign,
}

const DIFF_COLUMNS: [Column; 7] = [
    Column { title: "", align: TextAlign::Left },
    Column { title: "Program", align: TextAlign::Left },
    Column { title: "ACIR opcodes (+/-)", align: TextAlign::Right },
    Column { title: "%", align: TextAlign::Right },
    Column { title: "Circuit size (+/-)", align: TextAlign::Right },
    Column { title: "%", align: TextAlign::Right },
    Column { title: "", align: TextAlign::Left },
];

const NO_CHANGES: &str = "### There are no changes in circuit sizes";

fn header_line(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| column.title)
        .collect::<Vec<_>>()
        .join(" | ")
        .trim()
        .to_string()
}

fn alignment_line(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| if column.title.is_empty() { "" } else { column.align.pattern() })
        .collect::<Vec<_>>()
        .join("|")
        .trim()
        .to_string()
}

fn delta_emoji(delta: f64) -> &'static str {
    if delta > 0.0 {
        "❌"
    } else if delta < 0.0 {
        "✅"
    } else {
        "➖"
    }
}

fn percentage_cell(rows: &[Variation]) -> String {
    rows.iter()
        .map(|row| format!("**{}**", format_percentage(row.percentage)))
        .collect::<Vec<_>>()
        .join("<br />")
}

/// Summary cells: signed delta with a verdict emoji, then the percentage.
///
/// Several rows stack into one cell separated by `<br />`.
pub fn format_markdown_summary_cell(rows: &[Variation]) -> [String; 2] {
    let deltas = rows
        .iter()
        .map(|row| format!("{} {}", format_delta(row.delta), delta_emoji(row.delta)))
        .collect::<Vec<_>>()
        .join("<br />");
    [deltas, percentage_cell(rows)]
}

/// Full report cells: current value with its delta, then the percentage.
pub fn format_markdown_full_cell(rows: &[Variation]) -> [String; 2] {
    let values = rows
        .iter()
        .map(|row| format!("{}&nbsp;({})", group_thousands(row.current), format_delta(row.delta)))
        .collect::<Vec<_>>()
        .join("<br />");
    [values, percentage_cell(rows)]
}

fn row_line(diff: &DiffProgram, format_cell: fn(&[Variation]) -> [String; 2]) -> String {
    let [acir_value, acir_percentage] = format_cell(&[diff.acir_opcodes]);
    let [size_value, size_percentage] = format_cell(&[diff.circuit_size]);

    [
        String::new(),
        format!("**{}**", diff.name),
        acir_value,
        acir_percentage,
        size_value,
        size_percentage,
        String::new(),
    ]
    .join(" | ")
    .trim()
    .to_string()
}

fn commit_link(repository: &str, commit_hash: &str) -> String {
    format!("[{commit_hash}](/{repository}/commit/{commit_hash})")
}

/// Render `diffs` as a Markdown comment: a summary table of the most significant
/// changes followed by a collapsible table of every change.
///
/// `repository` is the `owner/name` slug used to link commits.
pub fn format_markdown_diff(
    header: &str,
    diffs: &[DiffProgram],
    repository: &str,
    commit_hash: &str,
    ref_commit_hash: Option<&str>,
    summary_quantile: f64,
) -> String {
    let mut attribution = format!("> Generated at commit: {}", commit_link(repository, commit_hash));
    if let Some(ref_commit_hash) = ref_commit_hash.filter(|hash| !hash.is_empty()) {
        attribution.push_str(&format!(
            ", compared to commit: {}",
            commit_link(repository, ref_commit_hash)
        ));
    }

    let mut lines = vec![header.to_string(), String::new(), attribution];
    if diffs.is_empty() {
        lines.push(String::new());
        lines.push(NO_CHANGES.to_string());
        return lines.join("\n").trim().to_string();
    }

    let table_header = header_line(&DIFF_COLUMNS);
    let table_alignment = alignment_line(&DIFF_COLUMNS);

    lines.push(String::new());
    lines.push(format!("### {}", summary_title(summary_quantile)));
    lines.push(String::new());
    lines.push(table_header.clone());
    lines.push(table_alignment.clone());
    lines.extend(
        summary_diffs(diffs, summary_quantile)
            .into_iter()
            .map(|diff| row_line(diff, format_markdown_summary_cell)),
    );
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("<details>".to_string());
    lines.push("<summary><strong>Full diff report</strong> 👇</summary>".to_string());
    lines.push("<br />".to_string());
    lines.push(String::new());
    lines.push(table_header);
    lines.push(table_alignment);
    lines.extend(diffs.iter().map(|diff| row_line(diff, format_markdown_full_cell)));
    lines.push("</details>".to_string());

    lines.join("\n").trim().to_string()
}
