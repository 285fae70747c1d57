//! Board storage for dead stone estimation.
//!
//! A plain rectangular grid of [`Sign`]s stored row-major in a `Vec`, so
//! cloning always yields an independent copy. Boards can be read from and
//! written to a small text format:
//!
//! ```text
//! . X O .
//! X X O O
//! ```
//!
//! `X` is black (+1), `O` is white (-1) and `.` is an empty point.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// The occupant of a board point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Empty,
    Black,
    White,
}

impl Sign {
    /// Numeric form: black is +1, white is -1, empty is 0.
    pub fn value(self) -> i8 {
        match self {
            Sign::Empty => 0,
            Sign::Black => 1,
            Sign::White => -1,
        }
    }

    /// Inverse of [`Sign::value`], using only the sign of `v`.
    pub fn from_value(v: i8) -> Self {
        match v.signum() {
            1 => Sign::Black,
            -1 => Sign::White,
            _ => Sign::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Sign::Empty
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Black => Sign::White,
            Sign::White => Sign::Black,
            Sign::Empty => Sign::Empty,
        }
    }
}

/// A board coordinate `(x, y)`, with `(0, 0)` in the top left corner.
pub type Vertex = (usize, usize);

/// Error returned when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// A cell character other than `X`, `O` or `.`
    InvalidCell { row: usize, col: usize, ch: char },
    /// A row whose length differs from the first row
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::InvalidCell { row, col, ch } => {
                write!(f, "invalid cell {ch:?} at row {row}, column {col}")
            }
            ParseBoardError::RaggedRow { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Sign>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Sign::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn has_vertex(&self, (x, y): Vertex) -> bool {
        x < self.width && y < self.height
    }

    /// Linear index of a vertex, consistent with [`Board::arrangement`].
    pub fn vertex_to_index(&self, (x, y): Vertex) -> usize {
        y * self.width + x
    }

    /// Read a point. Vertices off the board read as empty.
    pub fn get(&self, v: Vertex) -> Sign {
        if !self.has_vertex(v) {
            return Sign::Empty;
        }
        self.cells[self.vertex_to_index(v)]
    }

    /// Write a point. Writes off the board are ignored.
    pub fn set(&mut self, v: Vertex, sign: Sign) {
        if self.has_vertex(v) {
            let i = self.vertex_to_index(v);
            self.cells[i] = sign;
        }
    }

    /// Snapshot of all points, indexed by [`Board::vertex_to_index`].
    pub fn arrangement(&self) -> &[Sign] {
        &self.cells
    }

    /// All vertices in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    /// Orthogonal neighbors, clipped at the board edge.
    pub fn neighbors(&self, (x, y): Vertex) -> Vec<Vertex> {
        let mut v = Vec::with_capacity(4);
        if !self.has_vertex((x, y)) {
            return v;
        }
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < self.width {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < self.height {
            v.push((x, y + 1));
        }
        v
    }

    /// The connected group of points sharing the sign at `start`.
    ///
    /// For an empty point this is the connected empty region around it.
    pub fn chain(&self, start: Vertex) -> Vec<Vertex> {
        let mut out = Vec::new();
        if !self.has_vertex(start) {
            return out;
        }
        let sign = self.get(start);
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        visited[self.vertex_to_index(start)] = true;

        while let Some(v) = stack.pop() {
            out.push(v);
            for n in self.neighbors(v) {
                let ni = self.vertex_to_index(n);
                if !visited[ni] && self.get(n) == sign {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Sign>> = Vec::new();

        for line in s.lines() {
            let mut row = Vec::new();
            for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let sign = match ch {
                    'X' | 'x' => Sign::Black,
                    'O' | 'o' => Sign::White,
                    '.' => Sign::Empty,
                    _ => {
                        return Err(ParseBoardError::InvalidCell {
                            row: rows.len(),
                            col,
                            ch,
                        });
                    }
                };
                row.push(sign);
            }
            if row.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(ParseBoardError::RaggedRow {
                        row: rows.len(),
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Ok(Board {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match self.get((x, y)) {
                    Sign::Black => 'X',
                    Sign::White => 'O',
                    Sign::Empty => '.',
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Convert a vertex to Go notation (e.g. "D4"), given the board height.
///
/// Columns use letters A-Z skipping I, rows count up from the bottom edge.
/// Boards wider than 25 columns fall back to `(x, y)`.
pub fn str_vertex((x, y): Vertex, height: usize) -> String {
    if x >= 25 || y >= height {
        return format!("({x}, {y})");
    }
    let mut c = b'A' + x as u8;
    if c >= b'I' {
        c += 1;
    }
    format!("{}{}", c as char, height - y)
}
