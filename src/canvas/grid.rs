use serde::{Serialize, Serializer};

/// Width and height of the sprite grid.
pub const GRID_SIZE: usize = 8;

/// Value of a single grid cell: transparent or one of the three palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    #[default]
    Clear,
    One,
    Two,
    Three,
}

impl Ink {
    pub const ALL: [Self; 4] = [Self::Clear, Self::One, Self::Two, Self::Three];

    pub const fn value(self) -> u8 {
        match self {
            Self::Clear => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub const fn from_value(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Clear),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Palette slot this ink paints with, `None` for transparent.
    pub const fn slot(self) -> Option<Slot> {
        match self {
            Self::Clear => None,
            Self::One => Some(Slot::One),
            Self::Two => Some(Slot::Two),
            Self::Three => Some(Slot::Three),
        }
    }
}

impl Serialize for Ink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// One of the three palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    One,
    Two,
    Three,
}

impl Slot {
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }

    pub const fn ink(self) -> Ink {
        match self {
            Self::One => Ink::One,
            Self::Two => Ink::Two,
            Self::Three => Ink::Three,
        }
    }
}

/// Fixed-size 8×8 sprite. Cells are addressed `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Ink; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub const fn from_rows(cells: [[Ink; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Ink> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Write one cell. Returns `true` if the stored value changed.
    pub fn set(&mut self, row: usize, col: usize, ink: Ink) -> bool {
        let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            return false;
        };
        let changed = *cell != ink;
        *cell = ink;
        changed
    }

    pub const fn rows(&self) -> &[[Ink; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&ink| ink == Ink::Clear)
    }

    /// Number of cells holding `ink`.
    pub fn count(&self, ink: Ink) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == ink).count()
    }
}
