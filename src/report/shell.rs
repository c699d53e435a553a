//! Fixed-width text tables for terminal output.

use super::number::{format_delta, format_percentage, group_thousands};
use super::selection::{summary_diffs, summary_title};
use super::style::{Ansi, Paint, Style};
use crate::diff::{DiffProgram, Variation};

const MIN_PROGRAM_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 10;
const PERCENTAGE_WIDTH: usize = 9;
/// Value, delta and percentage sub-columns plus their separators
const METRIC_WIDTH: usize = 2 * VALUE_WIDTH + 1 + 3 + PERCENTAGE_WIDTH;

struct Column {
    title: &'static str,
    width: usize,
}

fn columns(program_width: usize) -> [Column; 5] {
    [
        Column { title: "", width: 0 },
        Column { title: "Program", width: program_width },
        Column { title: "ACIR opcodes (+/-)", width: METRIC_WIDTH },
        Column { title: "Circuit size (+/-)", width: METRIC_WIDTH },
        Column { title: "", width: 0 },
    ]
}

fn center(text: &str, width: usize) -> String {
    let left = (text.chars().count() + width) / 2;
    format!("{:<width$}", format!("{text:>left$}"))
}

fn header_line(columns: &[Column], painter: &dyn Paint) -> String {
    columns
        .iter()
        .map(|column| painter.paint(&center(column.title, column.width), Style::Bold))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim()
        .to_string()
}

fn separator_line(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| {
            if column.width > 0 {
                "-".repeat(column.width + 2)
            } else {
                String::new()
            }
        })
        .collect::<Vec<_>>()
        .join("|")
        .trim()
        .to_string()
}

/// Render one metric as `[value (delta), percentage]`.
pub fn format_shell_cell(cell: &Variation, painter: &dyn Paint) -> [String; 2] {
    let style = Style::for_delta(cell.delta);
    let delta = format!("({})", format_delta(cell.delta));
    let value = format!(
        "{:>width$} {}",
        group_thousands(cell.current),
        painter.paint_opt(&format!("{delta:<width$}", width = VALUE_WIDTH), style),
        width = VALUE_WIDTH
    );
    let percentage = format!(
        "{:>width$}",
        format_percentage(cell.percentage),
        width = PERCENTAGE_WIDTH
    );
    [value, painter.paint(&painter.paint_opt(&percentage, style), Style::Bold)]
}

fn row_line(diff: &DiffProgram, program_width: usize, painter: &dyn Paint) -> String {
    let name = format!("{:<program_width$}", diff.name);
    let [acir_value, acir_percentage] = format_shell_cell(&diff.acir_opcodes, painter);
    let [size_value, size_percentage] = format_shell_cell(&diff.circuit_size, painter);

    [
        String::new(),
        painter.paint_all(&name, &[Style::Grey, Style::Bold]),
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

fn table<'a>(
    rows: impl Iterator<Item = &'a DiffProgram>,
    program_width: usize,
    painter: &dyn Paint,
) -> String {
    let columns = columns(program_width);
    let separator = separator_line(&columns);

    let mut lines = vec![String::new(), header_line(&columns, painter)];
    lines.extend(rows.map(|diff| row_line(diff, program_width, painter)));
    lines.push(String::new());

    lines.join(&format!("\n{separator}\n")).trim().to_string()
}

/// Render a summary table and a full table of `diffs`, colored with ANSI codes.
pub fn format_shell_diff(diffs: &[DiffProgram], summary_quantile: f64) -> String {
    format_shell_diff_with(diffs, summary_quantile, &Ansi)
}

/// Render a summary table and a full table of `diffs` with the given painter.
pub fn format_shell_diff_with(
    diffs: &[DiffProgram],
    summary_quantile: f64,
    painter: &dyn Paint,
) -> String {
    let program_width = diffs
        .iter()
        .map(|diff| diff.name.chars().count())
        .fold(MIN_PROGRAM_WIDTH, usize::max);
    let title_styles = [Style::Yellow, Style::Bold, Style::Underline];

    let mut out = painter.paint_all(&format!("{}\n\n", summary_title(summary_quantile)), &title_styles);
    out.push_str(&table(
        summary_diffs(diffs, summary_quantile).into_iter(),
        program_width,
        painter,
    ));
    out.push_str(&painter.paint_all("\n\nFull diff report 👇\n\n", &title_styles));
    out.push_str(&table(diffs.iter(), program_width, painter));
    out
}
