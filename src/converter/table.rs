//! Table converter.
//!
//! Column widths start from the header text and the minimum dash run the
//! alignment colons need; `pretty` widens them to the longest rendered cell.
//! Rows may be positional arrays or mappings addressed by header name.

use super::JsonToMarkdown;
use crate::render::{escape_table_pipes, substitute_inline_formats};
use crate::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Alignment {
    #[default]
    None,
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Minimum dash count so the separator can carry the alignment colons.
    fn minimum_width(self) -> usize {
        match self {
            Alignment::Center => 3,
            Alignment::Left | Alignment::Right => 2,
            Alignment::None => 1,
        }
    }
}

/// Contract payload shape: `{headers, rows, aligns?, pretty?}`.
#[derive(Deserialize)]
struct TableSpec {
    headers: Vec<String>,
    rows: Vec<Value>,
    #[serde(default)]
    aligns: Vec<Alignment>,
    #[serde(default)]
    pretty: bool,
}

pub fn table(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    // Missing or ill-shaped headers/rows is recovered as empty output, not an
    // error: a bad table must not take the whole document down.
    let Ok(spec) = serde_json::from_value::<TableSpec>(input.clone()) else {
        return Ok(String::new());
    };

    let alignment: Vec<Alignment> = (0..spec.headers.len())
        .map(|column| spec.aligns.get(column).copied().unwrap_or_default())
        .collect();

    let mut widths: Vec<usize> = spec
        .headers
        .iter()
        .zip(&alignment)
        .map(|(header, align)| {
            align
                .minimum_width()
                .max(header.chars().count().saturating_sub(2))
        })
        .collect();

    // Cells render up front; `pretty` widths come from what actually prints.
    let mut body: Vec<Vec<String>> = Vec::with_capacity(spec.rows.len());
    for row in &spec.rows {
        let mut rendered = Vec::new();
        for cell in row_cells(row, &spec.headers) {
            let text = engine.render(&cell, "")?;
            let text = substitute_inline_formats(&text);
            let text = escape_table_pipes(&text);
            rendered.push(text.trim().to_string());
        }
        body.push(rendered);
    }

    if spec.pretty {
        for row in &body {
            for (column, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get(column).copied() {
                    widths[column] = width.max(cell.chars().count().saturating_sub(2));
                }
            }
        }
    }

    let header_row = format!(
        "| {} |",
        spec.headers
            .iter()
            .enumerate()
            .map(|(column, header)| pad_header(header, widths[column], alignment[column]))
            .collect::<Vec<_>>()
            .join(" | ")
    );

    let separator_row = format!(
        "| {} |",
        widths
            .iter()
            .zip(&alignment)
            .map(|(&width, &align)| separator_cell(width, align))
            .collect::<Vec<_>>()
            .join(" | ")
    );

    let data = body
        .iter()
        .map(|row| {
            format!(
                "| {} |",
                row.iter()
                    .enumerate()
                    .map(|(column, cell)| match (spec.pretty, widths.get(column)) {
                        (true, Some(&width)) => pad_cell(cell, width, alignment[column]),
                        _ => cell.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok([header_row, separator_row, data].join("\n"))
}

/// Positional rows keep their own cell count (column mismatch is tolerated);
/// mapping rows resolve by header name, missing entries becoming empty cells.
fn row_cells(row: &Value, headers: &[String]) -> Vec<Value> {
    match row {
        Value::Array(cells) => cells.clone(),
        _ => headers
            .iter()
            .map(|header| row.get(header.as_str()).cloned().unwrap_or(Value::Null))
            .collect(),
    }
}

fn pad_header(text: &str, width: usize, align: Alignment) -> String {
    let diff = (width + 2).saturating_sub(text.chars().count());
    match align {
        Alignment::Right => format!("{}{}", " ".repeat(diff), text),
        Alignment::Left => format!("{}{}", text, " ".repeat(diff)),
        Alignment::Center | Alignment::None => pad_center(text, diff),
    }
}

fn pad_cell(text: &str, width: usize, align: Alignment) -> String {
    let diff = (width + 2).saturating_sub(text.chars().count());
    match align {
        Alignment::Right => format!("{}{}", " ".repeat(diff), text),
        Alignment::Left | Alignment::None => format!("{}{}", text, " ".repeat(diff)),
        Alignment::Center => pad_center(text, diff),
    }
}

fn pad_center(text: &str, diff: usize) -> String {
    format!(
        "{}{}{}",
        " ".repeat(diff / 2),
        text,
        " ".repeat(diff - diff / 2)
    )
}

fn separator_cell(width: usize, align: Alignment) -> String {
    let dashes = "-".repeat(width);
    match align {
        Alignment::Center => format!(":{dashes}:"),
        Alignment::Right => format!("-{dashes}:"),
        Alignment::Left => format!(":{dashes}-"),
        Alignment::None => format!("-{dashes}-"),
    }
}
