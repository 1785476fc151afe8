//! Terminal presenters.
//!
//! [`TextPresenter`] prints the page the way a dataframe prints in a
//! terminal: an index column, padded cells, numeric columns right-aligned and
//! a `[N rows x M columns]` footer. [`JsonPresenter`] emits one JSON line per
//! table or error for scripting.
//!
//! Presenter calls never fail; the first write error is kept and returned
//! by `finish`.

use std::io::{self, Write};

use serde::Serialize;

use crate::effect::Presenter;
use crate::table::{ColumnKind, Row};
use crate::Table;

/// Default cap on printed cell width, in characters.
pub const DEFAULT_MAX_CELL_WIDTH: usize = 40;

const COLUMN_GAP: &str = "  ";

/// Human-readable presenter writing to any `Write`.
pub struct TextPresenter<W: Write> {
    out: W,
    max_cell_width: usize,
    error: Option<io::Error>,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            error: None,
        }
    }

    pub fn with_max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width.max(1);
        self
    }

    /// Return the writer, or the first write error.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_title(&mut self, text: &str) {
        let underline = "=".repeat(text.chars().count());
        self.emit(&format!("{text}\n{underline}"));
    }

    fn show_text(&mut self, text: &str) {
        self.emit(text);
    }

    fn show_uploader(&mut self, label: &str, accept: &[String]) {
        let kinds = accept
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(", ");
        self.emit(&format!("{label} ({kinds})"));
    }

    fn show_success(&mut self, text: &str) {
        self.emit(&format!("\u{2714} {text}"));
    }

    fn show_table(&mut self, table: &Table) {
        let grid = format_table(table, self.max_cell_width);
        self.emit(&grid);
    }

    fn show_error(&mut self, text: &str) {
        self.emit(&format!("\u{2716} {text}"));
    }
}

#[derive(Serialize)]
struct TableLine<'a> {
    columns: &'a [String],
    kinds: Vec<ColumnKind>,
    rows: &'a [Row],
}

#[derive(Serialize)]
struct ErrorLine<'a> {
    error: &'a str,
}

/// JSON-lines presenter: one object per table or error.
pub struct JsonPresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, value: &impl Serialize) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, value)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.out));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn show_title(&mut self, _text: &str) {}

    fn show_text(&mut self, _text: &str) {}

    fn show_uploader(&mut self, _label: &str, _accept: &[String]) {}

    fn show_success(&mut self, _text: &str) {}

    fn show_table(&mut self, table: &Table) {
        self.emit(&TableLine {
            columns: table.columns(),
            kinds: table.column_kinds(),
            rows: table.rows(),
        });
    }

    fn show_error(&mut self, text: &str) {
        self.emit(&ErrorLine { error: text });
    }
}

/// Render a table as an aligned text grid with an index column and footer.
pub fn format_table(table: &Table, max_cell_width: usize) -> String {
    let footer = format!(
        "[{} rows x {} columns]",
        table.row_count(),
        table.column_count()
    );
    if table.column_count() == 0 {
        return format!("Empty table\n{footer}");
    }

    let kinds = table.column_kinds();
    let header: Vec<String> = table
        .columns()
        .iter()
        .map(|c| truncate(c, max_cell_width))
        .collect();
    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            row.cells()
                .iter()
                .map(|c| truncate(c, max_cell_width))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|idx| {
            body.iter()
                .map(|cells| cells[idx].chars().count())
                .chain(std::iter::once(header[idx].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let index_width = table.row_count().saturating_sub(1).to_string().len();

    let format_line = |index: &str, cells: &[String]| -> String {
        let mut line = format!("{index:<index_width$}");
        for ((cell, &width), kind) in cells.iter().zip(&widths).zip(&kinds) {
            line.push_str(COLUMN_GAP);
            if kind.is_numeric() {
                line.push_str(&format!("{cell:>width$}"));
            } else {
                line.push_str(&format!("{cell:<width$}"));
            }
        }
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 3);
    lines.push(format_line("", &header));
    for (idx, cells) in body.iter().enumerate() {
        lines.push(format_line(&idx.to_string(), cells));
    }
    lines.push(String::new());
    lines.push(footer);
    lines.join("\n")
}

fn truncate(cell: &str, max: usize) -> String {
    // Newlines inside quoted fields would break the grid.
    let flat: String = cell
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        return flat;
    }
    if max <= 3 {
        return flat.chars().take(max).collect();
    }
    let mut short: String = flat.chars().take(max - 3).collect();
    short.push_str("...");
    short
}
