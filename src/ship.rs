//! Ship definitions: size, orientation, occupied segments and their damage.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments extend along the row (increasing column).
    Horizontal,
    /// Segments extend along the column (increasing row).
    Vertical,
}

impl Orientation {
    /// Coordinate of segment `i` for a ship anchored at `(x, y)`.
    pub fn step(self, (x, y): Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => (x, y + i),
            Orientation::Vertical => (x + i, y),
        }
    }
}

/// Index of a ship inside the board that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship: segments are appended while it is placed, damage is tracked per segment.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    orientation: Orientation,
    segments: Vec<Coord>,
    damaged: Vec<bool>,
}

impl Ship {
    /// Create an unplaced ship. `size` must be positive.
    pub fn new(size: usize, orientation: Orientation) -> Self {
        debug_assert!(size > 0, "ship size must be positive");
        Ship {
            size,
            orientation,
            segments: Vec::with_capacity(size),
            damaged: Vec::with_capacity(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied coordinates in placement order.
    pub fn segments(&self) -> &[Coord] {
        &self.segments
    }

    /// `true` once every segment has been laid on a board.
    pub fn is_placed(&self) -> bool {
        self.segments.len() == self.size
    }

    /// Record one more occupied coordinate; returns its segment index.
    pub(crate) fn push_segment(&mut self, coord: Coord) -> usize {
        debug_assert!(self.segments.len() < self.size, "ship already fully placed");
        self.segments.push(coord);
        self.damaged.push(false);
        self.segments.len() - 1
    }

    /// Segment index of `coord`, if this ship occupies it.
    pub fn segment_at(&self, coord: Coord) -> Option<usize> {
        self.segments.iter().position(|&c| c == coord)
    }

    /// Whether segment `index` has been hit.
    pub fn is_segment_damaged(&self, index: usize) -> bool {
        self.damaged.get(index).copied().unwrap_or(false)
    }

    /// Whether the segment at `coord` has been hit.
    pub fn is_damaged_at(&self, coord: Coord) -> bool {
        self.segment_at(coord)
            .map(|i| self.damaged[i])
            .unwrap_or(false)
    }

    /// Mark segment `index` as hit. Returns `true` if it was intact before;
    /// repeated hits leave the ship unchanged.
    pub(crate) fn damage_segment(&mut self, index: usize) -> bool {
        match self.damaged.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Coordinates that have been hit.
    pub fn damaged_segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments
            .iter()
            .zip(self.damaged.iter())
            .filter(|(_, hit)| **hit)
            .map(|(&c, _)| c)
    }

    /// Remaining intact segments: `size - damaged`.
    pub fn health(&self) -> usize {
        self.size - self.damaged.iter().filter(|&&hit| hit).count()
    }

    pub fn is_sunk(&self) -> bool {
        self.health() == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, orientation: {:?}, segments: {:?}, health: {} }}",
            self.size,
            self.orientation,
            self.segments,
            self.health(),
        )
    }
}
