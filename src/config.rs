use alloc::vec::Vec;

use crate::common::SetupError;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const DEFAULT_FLEET: [usize; 7] = [1, 1, 1, 1, 2, 2, 3];

/// Board dimension and fleet composition, fixed for a whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub dimension: usize,
    pub fleet: Vec<usize>,
}

impl GameConfig {
    pub fn new(dimension: usize, fleet: Vec<usize>) -> Self {
        Self { dimension, fleet }
    }

    /// Reject configurations no placement attempt could satisfy. Whether the
    /// fleet actually fits is only known after placement has been tried.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.dimension == 0 {
            return Err(SetupError::InvalidDimension);
        }
        if self.fleet.is_empty() {
            return Err(SetupError::EmptyFleet);
        }
        if self.fleet.iter().any(|&size| size == 0) {
            return Err(SetupError::InvalidShipSize);
        }
        Ok(())
    }

    /// Number of ship segments each side has to destroy.
    pub fn total_segments(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_FLEET.to_vec())
    }
}
