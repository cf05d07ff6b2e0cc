//! Random fleet placement with a one-cell gap between ships.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::SetupError;
use crate::ship::{Orientation, Ship};

/// Pick a random orientation.
pub fn random_orientation<R: Rng>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Place one ship of `size` at a random free anchor.
///
/// Anchors are drawn without replacement from the board's empty cells, each
/// with a fresh random orientation. An anchor that does not fit in the drawn
/// orientation is discarded; the attempt fails once no anchor is left.
pub fn place_ship<R: Rng>(
    board: &mut Board,
    size: usize,
    rng: &mut R,
) -> Result<(), SetupError> {
    if size == 0 {
        return Err(SetupError::InvalidShipSize);
    }
    let mut candidates = board.available_coordinates();
    let mut attempts = 0usize;
    while !candidates.is_empty() {
        attempts += 1;
        let pick = rng.random_range(0..candidates.len());
        let (x, y) = candidates.swap_remove(pick);
        let orientation = random_orientation(rng);
        let ship = Ship::new(size, orientation);
        if !board.can_place(x, y, &ship) {
            continue;
        }
        debug!(
            "placed ship of size {} at ({}, {}) {:?} after {} attempt(s)",
            size, x, y, orientation, attempts
        );
        board
            .place_with_padding(x, y, ship)
            .map_err(|_| SetupError::FleetDoesNotFit { size })?;
        return Ok(());
    }
    warn!(
        "no room for a ship of size {} on a {}x{} board",
        size,
        board.dimension(),
        board.dimension()
    );
    Err(SetupError::FleetDoesNotFit { size })
}

/// Place every ship of `fleet` on `board`, largest first, then clear the
/// temporary buffer marks so only ship cells remain non-empty.
pub fn place_fleet<R: Rng>(
    board: &mut Board,
    fleet: &[usize],
    rng: &mut R,
) -> Result<(), SetupError> {
    if board.dimension() == 0 {
        return Err(SetupError::InvalidDimension);
    }
    let mut sizes: Vec<usize> = fleet.to_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    for size in sizes {
        place_ship(board, size, rng)?;
    }
    board.clear_placement_buffers();
    Ok(())
}
