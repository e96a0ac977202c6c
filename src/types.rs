/// Fractional canvas position, rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub row: f64,
    pub column: f64,
}

impl Position {
    pub fn new(row: f64, column: f64) -> Self {
        Position { row, column }
    }

    pub fn add(&self, row_delta: f64, column_delta: f64) -> Self {
        Position::new(self.row + row_delta, self.column + column_delta)
    }

    /// The grid cell this position falls on.
    pub fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }
}

/// Axis-aligned rectangle: top-left corner plus size in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub row: i32,
    pub column: i32,
    pub rows: i32,
    pub columns: i32,
}

impl BoundingBox {
    pub fn new(row: i32, column: i32, rows: i32, columns: i32) -> Self {
        BoundingBox { row, column, rows, columns }
    }

    /// A single cell, used for the ship and bullets.
    pub fn point(row: i32, column: i32) -> Self {
        BoundingBox::new(row, column, 1, 1)
    }

    pub fn opposite_corner(&self) -> (i32, i32) {
        (self.row + self.rows - 1, self.column + self.columns - 1)
    }
}

/// Inner area of the canvas, inside the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Borders {
    pub row_min: i32,
    pub row_max: i32,
    pub column_min: i32,
    pub column_max: i32,
}

/// Player intent collected from one input poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub rows_direction: i32,
    pub columns_direction: i32,
    pub fire: bool,
    pub quit: bool,
}
