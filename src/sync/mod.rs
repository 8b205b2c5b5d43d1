//! Text encodings of the grid and palette.
//!
//! Structured state is always serialized with [`palette_to_text`] and
//! [`grid_to_text`]. Parsing goes the other way only when the user
//! confirms an edited text area, and anything malformed is rejected
//! with a [`SyncError`] so the previous state survives.

use serde_json::Value;

use crate::canvas::{GRID_SIZE, Grid, Ink, Palette, Rgb};

/// Why edited text could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("not valid JSON: {0}")]
    Json(String),
    #[error("expected a list, found {0}")]
    NotAList(&'static str),
    #[error("palette needs exactly 3 colors, found {0}")]
    PaletteLength(usize),
    #[error("palette entry {index}: {reason}")]
    InvalidColor { index: usize, reason: String },
    #[error("grid needs exactly {GRID_SIZE} rows, found {0}")]
    RowCount(usize),
    #[error("grid row {row} must be a list of {GRID_SIZE} cells")]
    RowShape { row: usize },
    #[error("grid cell ({row}, {col}) must be 0, 1, 2 or 3")]
    CellValue { row: usize, col: usize },
}

/// Which text area a sync error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Palette,
    Grid,
}

impl Target {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Palette => "palette",
            Self::Grid => "grid",
        }
    }
}

/// Canonical palette text: `["#rrggbb","#rrggbb","#rrggbb"]`.
pub fn palette_to_text(palette: &Palette) -> String {
    let colors = palette
        .colors()
        .iter()
        .map(|color| format!("\"{color}\""))
        .collect::<Vec<_>>();
    format!("[{}]", colors.join(","))
}

/// Canonical grid text: a JSON list with one row per line.
pub fn grid_to_text(grid: &Grid) -> String {
    let rows = grid
        .rows()
        .iter()
        .map(|row| {
            let cells = row.iter().map(|ink| ink.value().to_string()).collect::<Vec<_>>();
            format!("  [{}]", cells.join(","))
        })
        .collect::<Vec<_>>();
    format!("[\n{}\n]", rows.join(",\n"))
}

/// Parse edited palette text.
///
/// # Errors
///
/// Fails unless the text is a JSON list of exactly three color strings.
pub fn parse_palette(text: &str) -> Result<Palette, SyncError> {
    let items = parse_list(text)?;
    let len = items.len();
    let colors: [Value; 3] = items
        .try_into()
        .map_err(|_| SyncError::PaletteLength(len))?;
    let mut out = [Rgb::default(); 3];
    for (index, (value, slot)) in colors.into_iter().zip(out.iter_mut()).enumerate() {
        *slot = serde_json::from_value::<Rgb>(value).map_err(|err| SyncError::InvalidColor {
            index,
            reason: err.to_string(),
        })?;
    }
    Ok(Palette::new(out))
}

/// Parse edited grid text.
///
/// # Errors
///
/// Fails unless the text is a JSON list of 8 lists of 8 integers in `0..=3`.
pub fn parse_grid(text: &str) -> Result<Grid, SyncError> {
    let rows = parse_list(text)?;
    if rows.len() != GRID_SIZE {
        return Err(SyncError::RowCount(rows.len()));
    }
    let mut cells = [[Ink::Clear; GRID_SIZE]; GRID_SIZE];
    for (r, (value, out_row)) in rows.iter().zip(cells.iter_mut()).enumerate() {
        let row = value
            .as_array()
            .filter(|row| row.len() == GRID_SIZE)
            .ok_or(SyncError::RowShape { row: r })?;
        for (c, (cell, out)) in row.iter().zip(out_row.iter_mut()).enumerate() {
            *out = cell
                .as_u64()
                .and_then(Ink::from_value)
                .ok_or(SyncError::CellValue { row: r, col: c })?;
        }
    }
    Ok(Grid::from_rows(cells))
}

fn parse_list(text: &str) -> Result<Vec<Value>, SyncError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| SyncError::Json(err.to_string()))?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(SyncError::NotAList(json_kind(&other))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
