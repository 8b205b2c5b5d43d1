//! Screen regions and mouse hit-testing.
//!
//! Rendering and input both derive positions from [`EditorLayout`], so a
//! click always lands on what was drawn there.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::canvas::{GRID_SIZE, Ink, Slot};
use crate::editor::{Cursor, TextBuffer};
use crate::sync::Target;

/// Terminal columns per grid cell.
pub const CELL_WIDTH: u16 = 4;
/// Terminal rows per grid cell.
pub const CELL_HEIGHT: u16 = 2;

#[allow(clippy::cast_possible_truncation)]
const GRID_CELLS: u16 = GRID_SIZE as u16;
const GRID_OUTER_WIDTH: u16 = GRID_CELLS * CELL_WIDTH + 2;
const GRID_OUTER_HEIGHT: u16 = GRID_CELLS * CELL_HEIGHT + 2;
const PEN_WIDTH: u16 = 8;
const PEN_HEIGHT: u16 = 3;
const PALETTE_WIDTH: u16 = 33;
const PALETTE_HEIGHT: u16 = 5;
const PALETTE_TEXT_HEIGHT: u16 = 5;

/// Smallest terminal that shows every cell, pen and palette slot.
pub const MIN_WIDTH: u16 = GRID_OUTER_WIDTH + PALETTE_WIDTH;
/// Grid and pens, plus the toast and status rows.
pub const MIN_HEIGHT: u16 = GRID_OUTER_HEIGHT + PEN_HEIGHT + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    /// Grid block, including its border
    pub grid: Rect,
    /// Pen buttons for values 0..=3
    pub pens: [Rect; 4],
    /// Palette block, including its border
    pub palette: Rect,
    /// One row per palette slot inside `palette`
    pub colors: [Rect; 3],
    /// Palette text area, including its border
    pub palette_text: Rect,
    /// Grid text area, including its border
    pub grid_text: Rect,
    pub toast: Rect,
    pub status: Rect,
    fits: bool,
}

impl EditorLayout {
    /// Grid and pens on the left; palette and both text areas on the right.
    pub fn new(area: Rect) -> Self {
        let [main, toast, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
                .areas(area);
        let [left, right] =
            Layout::horizontal([Constraint::Length(GRID_OUTER_WIDTH), Constraint::Min(0)])
                .areas(main);
        let [grid, pen_row, _] = Layout::vertical([
            Constraint::Length(GRID_OUTER_HEIGHT),
            Constraint::Length(PEN_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(left);
        let pens = Layout::horizontal([Constraint::Length(PEN_WIDTH); 4]).areas(pen_row);
        let [palette, palette_text, grid_text] = Layout::vertical([
            Constraint::Length(PALETTE_HEIGHT),
            Constraint::Length(PALETTE_TEXT_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(right);
        let colors = Layout::vertical([Constraint::Length(1); 3])
            .areas(palette.inner(Margin::new(1, 1)));

        Self {
            grid,
            pens,
            palette,
            colors,
            palette_text,
            grid_text,
            toast,
            status,
            fits: area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT,
        }
    }

    /// Whether the terminal is large enough to draw and hit-test the editor.
    pub const fn fits(&self) -> bool {
        self.fits
    }

    /// Drawable area inside the grid border.
    pub fn grid_inner(&self) -> Rect {
        self.grid.inner(Margin::new(1, 1))
    }

    /// Screen region of one cell, clipped to the visible grid.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let inner = self.grid_inner();
        let (row, col) = (
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        );
        Rect::new(
            inner.x.saturating_add(col.saturating_mul(CELL_WIDTH)),
            inner.y.saturating_add(row.saturating_mul(CELL_HEIGHT)),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner)
    }

    /// Grid cell `(row, col)` under a screen position.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        let inner = self.grid_inner();
        if !point_in_rect(x, y, inner) {
            return None;
        }
        let col = usize::from((x - inner.x) / CELL_WIDTH);
        let row = usize::from((y - inner.y) / CELL_HEIGHT);
        (row < GRID_SIZE && col < GRID_SIZE).then_some((row, col))
    }

    pub fn pen_at(&self, x: u16, y: u16) -> Option<Ink> {
        self.pens
            .iter()
            .zip(Ink::ALL)
            .find_map(|(rect, ink)| point_in_rect(x, y, *rect).then_some(ink))
    }

    pub fn color_at(&self, x: u16, y: u16) -> Option<Slot> {
        self.colors
            .iter()
            .zip(Slot::ALL)
            .find_map(|(rect, slot)| point_in_rect(x, y, *rect).then_some(slot))
    }

    pub const fn text_area(&self, target: Target) -> Rect {
        match target {
            Target::Palette => self.palette_text,
            Target::Grid => self.grid_text,
        }
    }

    pub fn text_target_at(&self, x: u16, y: u16) -> Option<Target> {
        [Target::Palette, Target::Grid]
            .into_iter()
            .find(|&target| point_in_rect(x, y, self.text_area(target)))
    }
}

/// First visible `(line, col)` of a text area so the cursor stays in view.
pub fn text_scroll(cursor: Cursor, inner: Rect) -> (usize, usize) {
    let height = usize::from(inner.height.max(1));
    let width = usize::from(inner.width.max(1));
    (
        (cursor.line + 1).saturating_sub(height),
        (cursor.col + 1).saturating_sub(width),
    )
}

/// Buffer position under a screen point inside a text area's border.
pub fn text_position(buffer: &TextBuffer, outer: Rect, x: u16, y: u16) -> (usize, usize) {
    let inner = outer.inner(Margin::new(1, 1));
    let (line_offset, col_offset) = text_scroll(buffer.cursor(), inner);
    let line = line_offset + usize::from(y.saturating_sub(inner.y));
    let col = col_offset + usize::from(x.saturating_sub(inner.x));
    (line, col)
}

pub const fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
