//! Ship definitions: orientation and catalog entries.

use crate::common::BoardError;

/// Reserved board marker for a hit cell in rendered views.
pub const HIT_SYMBOL: char = 'X';
/// Reserved board marker for a missed shot.
pub const MISS_SYMBOL: char = 'o';
/// Reserved board marker for an empty cell.
pub const EMPTY_SYMBOL: char = '.';

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: display name, rendered symbol and length in cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipType {
    name: String,
    symbol: char,
    length: usize,
}

impl ShipType {
    /// Build a ship type, rejecting zero lengths and unusable symbols.
    /// Symbol uniqueness across a fleet is checked by the catalog.
    pub fn new(name: &str, symbol: char, length: usize) -> Result<Self, BoardError> {
        if length < 1 {
            return Err(BoardError::InvalidShip);
        }
        if !symbol.is_ascii_graphic() {
            return Err(BoardError::InvalidShip);
        }
        if symbol == HIT_SYMBOL || symbol == MISS_SYMBOL || symbol == EMPTY_SYMBOL {
            return Err(BoardError::InvalidShip);
        }
        Ok(Self {
            name: name.to_string(),
            symbol,
            length,
        })
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's rendered symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}
