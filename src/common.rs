//! Common types for the sea battle: coordinates, shot results, sides and errors.

/// Grid coordinate as `(row, col)`, both zero based.
pub type Coord = (usize, usize);

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Shot damaged a ship segment that was still intact.
    Hit,
    /// Shot landed on water.
    Miss,
    /// Shot destroyed the last intact segment of a ship of the given size.
    Sink(usize),
}

impl GuessResult {
    /// `true` for `Hit` and `Sink`; a hit grants the shooter another shot.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// The other participant.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Precondition violations raised by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { x: usize, y: usize },
    /// A ship operation was applied to a cell holding no ship.
    NotAShip { x: usize, y: usize },
    /// The cell was already shot at (miss mark or damaged segment).
    AlreadyTargeted { x: usize, y: usize },
    /// A ship cannot be laid over a cell that is not empty.
    Occupied { x: usize, y: usize },
    /// Sink handling requested for a ship that still has intact segments.
    ShipAfloat,
    /// A ship id that does not belong to this board.
    UnknownShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            BoardError::NotAShip { x, y } => write!(f, "No ship at ({}, {})", x, y),
            BoardError::AlreadyTargeted { x, y } => {
                write!(f, "Cell ({}, {}) was already targeted", x, y)
            }
            BoardError::Occupied { x, y } => write!(f, "Cell ({}, {}) is not empty", x, y),
            BoardError::ShipAfloat => write!(f, "Ship still has intact segments"),
            BoardError::UnknownShip => write!(f, "Ship does not belong to this board"),
        }
    }
}

/// Configuration errors: the requested game cannot be set up at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Board dimension must be positive.
    InvalidDimension,
    /// At least one ship is required.
    EmptyFleet,
    /// Ship sizes must be positive.
    InvalidShipSize,
    /// Every candidate anchor was tried and none could host a ship of `size`.
    FleetDoesNotFit { size: usize },
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::InvalidDimension => write!(f, "Board dimension must be at least 1"),
            SetupError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            SetupError::InvalidShipSize => write!(f, "Ship sizes must be at least 1"),
            SetupError::FleetDoesNotFit { size } => write!(
                f,
                "Ran out of free cells while placing a ship of size {}; \
                 enlarge the board or shrink the fleet",
                size
            ),
        }
    }
}

/// Errors returned by the turn resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying board precondition violation.
    Board(BoardError),
    /// The requested side is not the one to move.
    OutOfTurn,
    /// The match has already been decided.
    GameOver,
    /// The opponent ran out of untried cells while ships were still afloat.
    CandidatesExhausted,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::OutOfTurn => write!(f, "It is not this side's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::CandidatesExhausted => {
                write!(f, "Opponent has no untried cells left")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
