//! Sprite state: grid, palette, pen and the paint gesture.
//!
//! [`Canvas`] is the paint engine. It knows nothing about terminals or
//! text; callers translate pointer/keyboard input into
//! [`Canvas::begin_stroke`], [`Canvas::continue_stroke`] and
//! [`Canvas::end_stroke`].

mod color;
mod grid;

pub use color::{Channel, ParseColorError, Rgb};
pub use grid::{GRID_SIZE, Grid, Ink, Slot};

/// The three user-chosen colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 3],
}

impl Palette {
    pub const fn new(colors: [Rgb; 3]) -> Self {
        Self { colors }
    }

    pub const fn colors(&self) -> [Rgb; 3] {
        self.colors
    }

    pub const fn color(&self, slot: Slot) -> Rgb {
        self.colors[slot.index()]
    }

    /// Fill color for a cell value, `None` for transparent cells.
    pub fn ink_color(&self, ink: Ink) -> Option<Rgb> {
        ink.slot().map(|slot| self.color(slot))
    }

    /// Returns `true` if the slot changed.
    pub fn set(&mut self, slot: Slot, color: Rgb) -> bool {
        let entry = &mut self.colors[slot.index()];
        let changed = *entry != color;
        *entry = color;
        changed
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            Rgb::new(0xff, 0x00, 0x00),
            Rgb::new(0x00, 0xff, 0x00),
            Rgb::new(0x00, 0x00, 0xff),
        ])
    }
}

/// Paint-drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stroke {
    #[default]
    Idle,
    /// Pointer is down; `last` is the most recently painted cell.
    Drawing { last: (usize, usize) },
}

impl Stroke {
    pub const fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// Grid, palette, pen and stroke, mutated only through the methods below.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: Grid,
    palette: Palette,
    pen: Ink,
    stroke: Stroke,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            palette: Palette::default(),
            pen: Ink::One,
            stroke: Stroke::Idle,
        }
    }
}

impl Canvas {
    pub fn new(palette: Palette, pen: Ink) -> Self {
        Self {
            palette,
            pen,
            ..Self::default()
        }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    pub const fn pen(&self) -> Ink {
        self.pen
    }

    pub const fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub const fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// Pointer down on a cell: start drawing and paint it.
    ///
    /// Returns `true` if the grid changed.
    pub fn begin_stroke(&mut self, row: usize, col: usize) -> bool {
        self.stroke = Stroke::Drawing { last: (row, col) };
        self.grid.set(row, col, self.pen)
    }

    /// Pointer entered a cell while pressed. No-op unless drawing.
    pub fn continue_stroke(&mut self, row: usize, col: usize) -> bool {
        if !self.stroke.is_drawing() {
            return false;
        }
        self.stroke = Stroke::Drawing { last: (row, col) };
        self.grid.set(row, col, self.pen)
    }

    pub const fn end_stroke(&mut self) {
        self.stroke = Stroke::Idle;
    }

    pub const fn set_pen(&mut self, pen: Ink) {
        self.pen = pen;
    }

    pub fn set_color(&mut self, slot: Slot, color: Rgb) -> bool {
        self.palette.set(slot, color)
    }

    /// Shift one channel of a slot's color; always yields a valid color.
    pub fn adjust_channel(&mut self, slot: Slot, channel: Channel, delta: i16) -> bool {
        let next = self.palette.color(slot).adjusted(channel, delta);
        self.palette.set(slot, next)
    }

    pub fn replace_palette(&mut self, palette: Palette) -> bool {
        let changed = self.palette != palette;
        self.palette = palette;
        changed
    }

    pub fn replace_grid(&mut self, grid: Grid) -> bool {
        let changed = self.grid != grid;
        self.grid = grid;
        changed
    }

    /// Reset every cell to transparent.
    pub fn clear(&mut self) -> bool {
        self.replace_grid(Grid::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn painted_cells(grid: &Grid) -> Vec<(usize, usize, Ink)> {
        let mut out = Vec::new();
        for (r, row) in grid.rows().iter().enumerate() {
            for (c, &ink) in row.iter().enumerate() {
                if ink != Ink::Clear {
                    out.push((r, c, ink));
                }
            }
        }
        out
    }

    #[test]
    fn test_paint_single_cell_example() {
        let mut canvas = Canvas::new(Palette::default(), Ink::One);
        assert_eq!(canvas.palette().color(Slot::One), Rgb::new(255, 0, 0));

        canvas.begin_stroke(2, 3);
        canvas.end_stroke();

        assert_eq!(canvas.grid().get(2, 3), Some(Ink::One));
        assert_eq!(painted_cells(canvas.grid()), vec![(2, 3, Ink::One)]);
        assert!(!canvas.is_drawing());
    }

    #[test]
    fn test_continue_without_begin_is_noop() {
        let mut canvas = Canvas::new(Palette::default(), Ink::Two);
        assert!(!canvas.continue_stroke(4, 4));
        assert!(canvas.grid().is_empty());
    }

    #[test]
    fn test_continue_after_end_is_noop() {
        let mut canvas = Canvas::new(Palette::default(), Ink::Two);
        canvas.begin_stroke(0, 0);
        canvas.end_stroke();
        assert!(!canvas.continue_stroke(0, 1));
        assert_eq!(canvas.grid().get(0, 1), Some(Ink::Clear));
    }

    #[test]
    fn test_drag_uses_pen_at_visit_time() {
        let mut canvas = Canvas::new(Palette::default(), Ink::One);
        canvas.begin_stroke(0, 0);
        canvas.continue_stroke(0, 1);
        canvas.set_pen(Ink::Three);
        canvas.continue_stroke(0, 2);
        canvas.end_stroke();

        assert_eq!(canvas.grid().get(0, 0), Some(Ink::One));
        assert_eq!(canvas.grid().get(0, 1), Some(Ink::One));
        assert_eq!(canvas.grid().get(0, 2), Some(Ink::Three));
    }

    #[test]
    fn test_stroke_tracks_last_cell() {
        let mut canvas = Canvas::default();
        canvas.begin_stroke(1, 1);
        canvas.continue_stroke(1, 2);
        assert_eq!(canvas.stroke(), Stroke::Drawing { last: (1, 2) });
        canvas.end_stroke();
        assert_eq!(canvas.stroke(), Stroke::Idle);
    }

    #[test]
    fn test_clear_pen_erases() {
        let mut canvas = Canvas::new(Palette::default(), Ink::One);
        canvas.begin_stroke(5, 5);
        canvas.end_stroke();
        canvas.set_pen(Ink::Clear);
        canvas.begin_stroke(5, 5);
        canvas.end_stroke();
        assert!(canvas.grid().is_empty());
    }

    #[test]
    fn test_color_change_recolors_painted_cells() {
        let mut canvas = Canvas::new(Palette::default(), Ink::Two);
        canvas.begin_stroke(0, 0);
        canvas.end_stroke();
        canvas.set_color(Slot::Two, Rgb::new(1, 2, 3));
        let ink = canvas.grid().get(0, 0).unwrap();
        assert_eq!(canvas.palette().ink_color(ink), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_adjust_channel() {
        let mut canvas = Canvas::default();
        assert!(canvas.adjust_channel(Slot::One, Channel::Red, 16));
        assert!(canvas.adjust_channel(Slot::One, Channel::Green, 16));
        assert_eq!(canvas.palette().color(Slot::One), Rgb::new(255, 16, 0));
    }

    proptest! {
        #[test]
        fn prop_click_paints_exactly_one_cell(row in 0..GRID_SIZE, col in 0..GRID_SIZE, pen in 1u64..=3) {
            let pen = Ink::from_value(pen).unwrap();
            let mut canvas = Canvas::new(Palette::default(), pen);
            canvas.begin_stroke(row, col);
            canvas.end_stroke();
            prop_assert_eq!(painted_cells(canvas.grid()), vec![(row, col, pen)]);
        }

        #[test]
        fn prop_drag_paints_every_visited_cell(
            path in proptest::collection::vec((0..GRID_SIZE, 0..GRID_SIZE, 0u64..=3), 1..24)
        ) {
            let mut canvas = Canvas::default();
            let mut expected = Grid::default();
            for (i, &(row, col, pen)) in path.iter().enumerate() {
                let pen = Ink::from_value(pen).unwrap();
                canvas.set_pen(pen);
                if i == 0 {
                    canvas.begin_stroke(row, col);
                } else {
                    canvas.continue_stroke(row, col);
                }
                expected.set(row, col, pen);
            }
            canvas.end_stroke();
            prop_assert_eq!(canvas.grid(), &expected);
        }
    }
}
