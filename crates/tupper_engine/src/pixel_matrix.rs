//! The fixed size bit grid shown on screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{EngineError, HEIGHT, Result, WIDTH};

/// HEIGHT rows of WIDTH cells. Never resized, never sparse.
///
/// Cells are addressed `(x, y)` = (column, row), row 0 being the top row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct PixelMatrix {
    rows: Vec<Vec<bool>>,
}

impl Default for PixelMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelMatrix {
    /// Create an all-clear matrix
    pub fn new() -> Self {
        Self {
            rows: vec![vec![false; WIDTH]; HEIGHT],
        }
    }

    /// Build a matrix from a per-cell function of `(x, y)`
    pub(crate) fn from_fn(f: impl Fn(usize, usize) -> bool) -> Self {
        let rows = (0..HEIGHT).map(|y| (0..WIDTH).map(|x| f(x, y)).collect()).collect();
        Self { rows }
    }

    /// Wrap raw rows, checking the dimensions
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(EngineError::invalid_input(format!("expected {HEIGHT} rows, got {}", rows.len())));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != WIDTH) {
            return Err(EngineError::invalid_input(format!("row {y} has {} cells, expected {WIDTH}", row.len())));
        }
        Ok(Self { rows })
    }

    /// Whether `(x, y)` addresses a cell of the grid
    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT
    }

    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set a single cell, failing with `OutOfBounds` outside the grid
    pub fn set(&mut self, x: i32, y: i32, value: bool) -> Result<()> {
        if !Self::in_bounds(x, y) {
            return Err(EngineError::out_of_bounds(x, y));
        }
        self.rows[y as usize][x as usize] = value;
        Ok(())
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(false);
        }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of set cells
    pub fn count_set(&self) -> usize {
        self.rows.iter().flatten().filter(|&&p| p).count()
    }

    pub fn is_clear(&self) -> bool {
        self.rows.iter().flatten().all(|&p| !p)
    }

    /// Render one text line per row
    pub fn to_text(&self, on: char, off: char) -> String {
        let mut result = String::with_capacity(HEIGHT * (WIDTH + 1));
        for row in &self.rows {
            result.extend(row.iter().map(|&p| if p { on } else { off }));
            result.push('\n');
        }
        result
    }

    /// Parse the text form produced by [`PixelMatrix::to_text`].
    ///
    /// `#`, `1`, `X`, `x`, `*` are set cells; `.`, `0` and space are clear.
    /// Short rows and missing trailing rows are padded with clear cells.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut matrix = Self::new();
        let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();

        // trailing blank lines are what editors leave behind
        let used = lines.iter().rposition(|l| !l.trim().is_empty()).map_or(0, |i| i + 1);
        if used > HEIGHT {
            return Err(EngineError::invalid_input(format!("text grid has {used} rows, at most {HEIGHT} allowed")));
        }

        for (y, line) in lines[..used].iter().enumerate() {
            let line = line.trim_end();
            let width = line.chars().count();
            if width > WIDTH {
                return Err(EngineError::invalid_input(format!("row {y} has {width} cells, at most {WIDTH} allowed")));
            }
            for (x, ch) in line.chars().enumerate() {
                matrix.rows[y][x] = match ch {
                    '#' | '1' | 'X' | 'x' | '*' => true,
                    '.' | '0' | ' ' => false,
                    other => {
                        return Err(EngineError::invalid_input(format!("unexpected character '{other}' at ({x}, {y})")));
                    }
                };
            }
        }
        Ok(matrix)
    }
}

impl TryFrom<Vec<Vec<bool>>> for PixelMatrix {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<PixelMatrix> for Vec<Vec<bool>> {
    fn from(matrix: PixelMatrix) -> Self {
        matrix.rows
    }
}

impl fmt::Display for PixelMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text('#', '.'))
    }
}

impl FromStr for PixelMatrix {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}
