//! Game board: an N×N grid of cells, owning every ship placed on it.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, GuessResult};
use crate::ship::{Ship, ShipId};

/// Raw content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Untouched water.
    Empty,
    /// A confirmed miss, or a buffer cell next to a ship.
    Miss,
    /// Segment `segment` of ship `ship`.
    Ship { ship: ShipId, segment: usize },
}

/// What a renderer needs to know about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Ship,
    Miss,
    Hit,
}

/// Game board state: grid marks plus the ships the grid refers to.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `dimension`×`dimension` board.
    pub fn new(dimension: usize) -> Self {
        Board {
            dimension,
            grid: alloc::vec![Cell::Empty; dimension * dimension],
            ships: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// `true` iff `0 <= x, y < dimension`.
    pub fn is_valid_coordinate(&self, x: usize, y: usize) -> bool {
        x < self.dimension && y < self.dimension
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.is_valid_coordinate(x, y) {
            Ok(x * self.dimension + y)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Cell content, `None` outside the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).ok().map(|i| self.grid[i])
    }

    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(Cell::Empty))
    }

    pub fn is_miss(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(Cell::Miss))
    }

    pub fn is_ship(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(Cell::Ship { .. }))
    }

    /// `false` only for a ship segment that is already damaged (or off board).
    pub fn is_available_ship_cell(&self, x: usize, y: usize) -> bool {
        match self.cell(x, y) {
            Some(Cell::Ship { ship, segment }) => !self.ships[ship.0].is_segment_damaged(segment),
            Some(_) => true,
            None => false,
        }
    }

    /// A legal shot: on the board, and either water or an intact ship segment.
    pub fn is_targetable(&self, x: usize, y: usize) -> bool {
        self.is_empty(x, y) || (self.is_ship(x, y) && self.is_available_ship_cell(x, y))
    }

    /// Display tag for a cell; ships are shown as `Empty` unless `reveal` is set.
    pub fn cell_view(&self, x: usize, y: usize, reveal: bool) -> Option<CellView> {
        let view = match self.cell(x, y)? {
            Cell::Empty => CellView::Empty,
            Cell::Miss => CellView::Miss,
            Cell::Ship { ship, segment } => {
                if self.ships[ship.0].is_segment_damaged(segment) {
                    CellView::Hit
                } else if reveal {
                    CellView::Ship
                } else {
                    CellView::Empty
                }
            }
        };
        Some(view)
    }

    /// Overwrite a cell with a miss mark. Does not guard against ship cells.
    pub fn place_miss(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let i = self.index(x, y)?;
        self.grid[i] = Cell::Miss;
        Ok(())
    }

    /// Overwrite a cell with water. Does not guard against ship cells.
    pub fn place_empty(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let i = self.index(x, y)?;
        self.grid[i] = Cell::Empty;
        Ok(())
    }

    /// Damage the ship segment at `(x, y)`.
    ///
    /// Returns `Sink(size)` when this destroyed the last intact segment.
    /// A segment that is already damaged is rejected and the ship is left as is.
    pub fn place_hit(&mut self, x: usize, y: usize) -> Result<GuessResult, BoardError> {
        let i = self.index(x, y)?;
        let (ship_id, segment) = match self.grid[i] {
            Cell::Ship { ship, segment } => (ship, segment),
            _ => return Err(BoardError::NotAShip { x, y }),
        };
        let ship = &mut self.ships[ship_id.index()];
        if !ship.damage_segment(segment) {
            return Err(BoardError::AlreadyTargeted { x, y });
        }
        if ship.is_sunk() {
            Ok(GuessResult::Sink(ship.size()))
        } else {
            Ok(GuessResult::Hit)
        }
    }

    /// All ships on the board, indexed by `ShipId`.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    /// Ship occupying `(x, y)`, if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<(ShipId, &Ship)> {
        match self.cell(x, y)? {
            Cell::Ship { ship, .. } => Some((ship, &self.ships[ship.index()])),
            _ => None,
        }
    }

    /// Every one of the ship's cells, starting at `(x, y)` along its
    /// orientation, is on the board and currently empty.
    pub fn can_place(&self, x: usize, y: usize, ship: &Ship) -> bool {
        (0..ship.size()).all(|i| {
            let (sx, sy) = ship.orientation().step((x, y), i);
            self.is_empty(sx, sy)
        })
    }

    /// Lay `ship` anchored at `(x, y)` and mark the orthogonal neighbours of
    /// every segment as misses, so no later ship can touch it.
    pub fn place_with_padding(
        &mut self,
        x: usize,
        y: usize,
        mut ship: Ship,
    ) -> Result<ShipId, BoardError> {
        for i in 0..ship.size() {
            let (sx, sy) = ship.orientation().step((x, y), i);
            let idx = self.index(sx, sy)?;
            if self.grid[idx] != Cell::Empty {
                return Err(BoardError::Occupied { x: sx, y: sy });
            }
        }

        let id = ShipId(self.ships.len());
        for i in 0..ship.size() {
            let (sx, sy) = ship.orientation().step((x, y), i);
            let segment = ship.push_segment((sx, sy));
            let idx = sx * self.dimension + sy;
            self.grid[idx] = Cell::Ship { ship: id, segment };
        }
        self.mark_around(ship.segments());
        self.ships.push(ship);
        Ok(id)
    }

    /// Close off the water around a sunk ship.
    pub fn mark_sink_buffer(&mut self, id: ShipId) -> Result<(), BoardError> {
        let ship = self.ships.get(id.index()).ok_or(BoardError::UnknownShip)?;
        if !ship.is_sunk() {
            return Err(BoardError::ShipAfloat);
        }
        let segments = ship.segments().to_vec();
        self.mark_around(&segments);
        Ok(())
    }

    // Empty orthogonal neighbours only; ship cells are never overwritten.
    fn mark_around(&mut self, segments: &[Coord]) {
        for &(x, y) in segments {
            let neighbours = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in neighbours {
                if let Ok(i) = self.index(nx, ny) {
                    if self.grid[i] == Cell::Empty {
                        self.grid[i] = Cell::Miss;
                    }
                }
            }
        }
    }

    /// Turn every miss mark back into water once placement is finished.
    pub fn clear_placement_buffers(&mut self) {
        for cell in self.grid.iter_mut() {
            if *cell == Cell::Miss {
                *cell = Cell::Empty;
            }
        }
    }

    /// Every coordinate of the board in row-major order.
    pub fn coordinates(&self) -> Vec<Coord> {
        let n = self.dimension;
        (0..n).flat_map(|x| (0..n).map(move |y| (x, y))).collect()
    }

    /// Currently empty cells, recomputed from the grid on every call.
    pub fn available_coordinates(&self) -> Vec<Coord> {
        self.coordinates()
            .into_iter()
            .filter(|&(x, y)| self.is_empty(x, y))
            .collect()
    }

    /// `true` while any ship on the grid still has an intact segment.
    pub fn has_living_ships(&self) -> bool {
        self.grid.iter().any(|cell| match cell {
            Cell::Ship { ship, .. } => self.ships[ship.0].health() > 0,
            _ => false,
        })
    }

    /// Number of ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ dimension: {}, ships: {:?} }}", self.dimension, self.ships)?;
        for x in 0..self.dimension {
            for y in 0..self.dimension {
                let ch = match self.cell_view(x, y, true) {
                    Some(CellView::Ship) => 'S',
                    Some(CellView::Hit) => 'X',
                    Some(CellView::Miss) => 'o',
                    _ => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
