//! Cell grid with an optional periodic background, serialised row by row.

use crate::core::{
    bounds::CanvasShape,
    color::{AnsiCode, Palette},
    config::GridSize,
    data::Lane,
};

/// How a cell is coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ink {
    /// Untouched background (blank or grid character).
    Background,
    Series(Lane),
    /// Foreground lane over the other lane as background.
    Transition(Lane),
}

/// One character position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub ink: Ink,
    /// Fill from the top of the cell instead of the bottom.
    pub reverse: bool,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn background(glyph: char) -> Self {
        Self {
            glyph,
            ink: Ink::Background,
            reverse: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_background(&self) -> bool {
        matches!(self.ink, Ink::Background)
    }

    /// Append this cell, escapes included, to `out`.
    fn write_into(&self, out: &mut String, palette: &Palette) {
        let color = match self.ink {
            Ink::Background => {
                out.push(self.glyph);
                return;
            }
            Ink::Series(lane) => palette.series(lane),
            Ink::Transition(lane) => palette.transition(lane),
        };
        let reverse = if self.reverse {
            AnsiCode::reverse()
        } else {
            AnsiCode::none()
        };
        if color.is_empty() && reverse.is_empty() {
            out.push(self.glyph);
            return;
        }
        out.push_str(reverse.as_str());
        out.push_str(color.as_str());
        out.push(self.glyph);
        out.push_str(AnsiCode::reset().as_str());
    }
}

/// Background character for `(x, y)` on a grid with period `grid`.
#[inline]
#[must_use]
pub fn grid_glyph(x: usize, y: usize, grid: GridSize) -> char {
    let on_column = x % grid.width == grid.width - 1;
    let on_row = y % grid.height == grid.height - 1;
    match (on_column, on_row) {
        (true, true) => '+',
        (false, true) => '-',
        (true, false) => '|',
        (false, false) => ' ',
    }
}

/// `rows × columns` grid; row 0 is the top line of the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    shape: CanvasShape,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Fresh canvas, pre-filled with the grid pattern when one is given.
    #[must_use]
    pub fn new(shape: CanvasShape, grid: Option<GridSize>) -> Self {
        let mut cells = Vec::with_capacity(shape.rows * shape.columns);
        for y in 0..shape.rows {
            for x in 0..shape.columns {
                let glyph = grid.map_or(' ', |g| grid_glyph(x, y, g));
                cells.push(Cell::background(glyph));
            }
        }
        Self { shape, cells }
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> CanvasShape {
        self.shape
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.shape.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.shape.columns
    }

    /// Cell at column `x`, row `y`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        (x < self.shape.columns)
            .then(|| self.cells.get(y * self.shape.columns + x))
            .flatten()
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let columns = self.shape.columns;
        self.cells[y * columns + x] = cell;
    }

    /// Row `y` as plain glyphs, no escapes.
    #[must_use]
    pub fn glyph_row(&self, y: usize) -> String {
        self.row_cells(y).iter().map(|c| c.glyph).collect()
    }

    fn row_cells(&self, y: usize) -> &[Cell] {
        let columns = self.shape.columns;
        &self.cells[y * columns..(y + 1) * columns]
    }

    /// Every row serialised with the palette's escapes.
    #[must_use]
    pub fn to_lines(&self, palette: &Palette) -> Vec<String> {
        (0..self.shape.rows)
            .map(|y| {
                let mut line = String::with_capacity(self.shape.columns * 4);
                for cell in self.row_cells(y) {
                    cell.write_into(&mut line, palette);
                }
                line
            })
            .collect()
    }
}
