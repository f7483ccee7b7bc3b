//! Common types: grid coordinates, attack outcomes and the board error enum.

/// Identifier of a ship within a [`crate::Catalog`]. Ids are dense,
/// `0..n_ships`, assigned in the order ships were added.
pub type ShipId = usize;

/// A cell coordinate, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub r: usize,
    pub c: usize,
}

impl Point {
    pub const fn new(r: usize, c: usize) -> Self {
        Point { r, c }
    }
}

/// Result of a valid attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The cell held no ship segment.
    Miss,
    /// A ship segment was hit but the ship still has intact cells.
    Hit,
    /// The hit removed the ship's last intact cell.
    Sunk(ShipId),
}

/// Outcome of an attack as reported back to a player, with invalid shots
/// folded in (out of bounds or already-attacked cells are wasted turns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackResult {
    Invalid,
    Miss,
    Hit,
    Sunk(ShipId),
}

impl From<AttackOutcome> for AttackResult {
    fn from(o: AttackOutcome) -> Self {
        match o {
            AttackOutcome::Miss => AttackResult::Miss,
            AttackOutcome::Hit => AttackResult::Hit,
            AttackOutcome::Sunk(id) => AttackResult::Sunk(id),
        }
    }
}

/// Errors returned by Board and Catalog operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship id is outside the catalog range.
    InvalidIndex,
    /// Attempted to place a ship that is already on the board.
    ShipAlreadyPlaced,
    /// Ship footprint would leave the grid.
    ShipOutOfBounds,
    /// Ship footprint crosses an occupied or blocked cell.
    ShipOverlaps,
    /// Attempted to unplace a ship that is not on the board.
    ShipNotPlaced,
    /// Unplacement footprint does not match the ship's actual cells.
    PlacementMismatch,
    /// Attack coordinate is outside the grid.
    OutOfBounds,
    /// Cell was already attacked.
    AlreadyAttacked,
    /// Ship definition rejected by the catalog (bad length or symbol).
    InvalidShip,
    /// Board dimensions outside the supported range.
    InvalidDimensions,
    /// Total ship cells exceed the board area.
    BoardTooSmall,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "ship id is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "ship is already placed on the board"),
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps an unavailable cell"),
            BoardError::ShipNotPlaced => write!(f, "ship is not placed on the board"),
            BoardError::PlacementMismatch => {
                write!(f, "footprint does not match the ship's placement")
            }
            BoardError::OutOfBounds => write!(f, "coordinate is outside the board"),
            BoardError::AlreadyAttacked => write!(f, "cell was already attacked"),
            BoardError::InvalidShip => write!(f, "ship definition is invalid"),
            BoardError::InvalidDimensions => write!(f, "board dimensions are out of range"),
            BoardError::BoardTooSmall => write!(f, "board is too small to fit all ships"),
        }
    }
}

impl std::error::Error for BoardError {}
