//! Tile map: a fixed grid of wall tiles addressed by continuous world coordinates.
use crate::error::MapError;

/// Classic 16x16 demo layout. Digits pick a wall texture, spaces are open floor.
pub const DEFAULT_LAYOUT: [&str; 16] = [
    "0000222222220000",
    "1              0",
    "1      11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   3   11100  0",
    "5   4   0      0",
    "5   4   1  00000",
    "0       1      0",
    "2       1      0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
}

impl TileMap {
    /// Parses one string per row. A space is empty floor, a digit is a wall
    /// texture index. Rows must share a length and the outer ring must be solid.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MapError::Ragged { row, expected: width, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    ' ' => None,
                    '0'..='9' => ch.to_digit(10).map(|d| d as usize),
                    _ => return Err(MapError::BadTile { row, col, ch }),
                };
                cells.push(cell);
            }
        }

        let map = Self { width, height, cells };
        if let Some((i, j)) = map.first_open_border_cell() {
            return Err(MapError::OpenBorder { i, j });
        }
        Ok(map)
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    /// Bounds-checked cell lookup. `None` outside the grid, `Some(None)` for floor.
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> Option<Option<usize>> {
        if i < self.width && j < self.height {
            Some(self.cells[i + j * self.width])
        } else {
            None
        }
    }

    /// Cell indices for a world position, truncated toward zero.
    #[inline]
    fn cell_index(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (i, j) = (x as usize, y as usize);
        (i < self.width && j < self.height).then_some((i, j))
    }

    /// True when the tile containing `(x, y)` holds no wall.
    /// Positions off the grid count as empty void.
    #[inline]
    pub fn is_empty(&self, x: f32, y: f32) -> bool {
        match self.cell_index(x, y) {
            Some((i, j)) => self.cells[i + j * self.width].is_none(),
            None => true,
        }
    }

    /// Wall texture index at `(x, y)`. Callers check `!is_empty(x, y)` first.
    #[inline]
    pub fn tile_at(&self, x: f32, y: f32) -> usize {
        let tile = self
            .cell_index(x, y)
            .and_then(|(i, j)| self.cells[i + j * self.width]);
        debug_assert!(tile.is_some(), "tile_at({x}, {y}) on an empty tile");
        tile.unwrap_or(0)
    }

    /// Every wall cell as `(i, j, texture)`, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(k, c)| c.map(|t| (k % self.width, k / self.width, t)))
    }

    /// Highest texture index the map refers to.
    pub fn max_texture(&self) -> Option<usize> {
        self.cells.iter().flatten().copied().max()
    }

    pub fn has_solid_border(&self) -> bool {
        self.first_open_border_cell().is_none()
    }

    fn first_open_border_cell(&self) -> Option<(usize, usize)> {
        let (w, h) = (self.width, self.height);
        let top_bottom = (0..w).flat_map(|i| [(i, 0), (i, h - 1)]);
        let sides = (0..h).flat_map(|j| [(0, j), (w - 1, j)]);
        top_bottom
            .chain(sides)
            .find(|&(i, j)| self.cells[i + j * w].is_none())
    }
}

impl Default for TileMap {
    fn default() -> Self {
        let cells = DEFAULT_LAYOUT
            .iter()
            .flat_map(|row| row.chars().map(|ch| ch.to_digit(10).map(|d| d as usize)))
            .collect();
        Self { width: 16, height: 16, cells }
    }
}
