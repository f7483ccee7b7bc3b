//! Game catalog: board geometry plus the read-only ship roster.

use crate::common::{BoardError, Point, ShipId};
use crate::ship::{Orientation, ShipType};
use rand::Rng;

/// Largest supported board dimension.
pub const MAX_ROWS: usize = 10;
pub const MAX_COLS: usize = 10;

/// Board geometry and the immutable ship roster for one game. Ships get
/// dense ids `0..n_ships` in insertion order; the catalog never changes
/// once play begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rows: usize,
    cols: usize,
    ships: Vec<ShipType>,
}

impl Catalog {
    /// Create an empty catalog for a `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < 1 || rows > MAX_ROWS || cols < 1 || cols > MAX_COLS {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Self {
            rows,
            cols,
            ships: Vec::new(),
        })
    }

    /// The classic 10x10 five-ship fleet.
    pub fn standard() -> Self {
        let mut catalog = Self::new(10, 10).expect("standard dimensions are valid");
        for (name, symbol, length) in [
            ("Carrier", 'A', 5),
            ("Battleship", 'B', 4),
            ("Cruiser", 'C', 3),
            ("Submarine", 'S', 3),
            ("Destroyer", 'D', 2),
        ] {
            catalog
                .add_ship(name, symbol, length)
                .expect("standard fleet is valid");
        }
        catalog
    }

    /// Register a ship, assigning it the next dense id. Rejects ships that
    /// fit neither dimension, symbols already in use, and fleets whose
    /// total cell count exceeds the board area.
    pub fn add_ship(&mut self, name: &str, symbol: char, length: usize) -> Result<ShipId, BoardError> {
        let ship = ShipType::new(name, symbol, length)?;
        if length > self.rows && length > self.cols {
            return Err(BoardError::InvalidShip);
        }
        if self.ships.iter().any(|s| s.symbol() == symbol) {
            return Err(BoardError::InvalidShip);
        }
        let total: usize = self.ships.iter().map(|s| s.length()).sum();
        if total + length > self.rows * self.cols {
            return Err(BoardError::BoardTooSmall);
        }
        self.ships.push(ship);
        Ok(self.ships.len() - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn n_ships(&self) -> usize {
        self.ships.len()
    }

    pub fn ship(&self, id: ShipId) -> Option<&ShipType> {
        self.ships.get(id)
    }

    pub fn ship_length(&self, id: ShipId) -> usize {
        self.ships[id].length()
    }

    pub fn ship_symbol(&self, id: ShipId) -> char {
        self.ships[id].symbol()
    }

    pub fn ship_name(&self, id: ShipId) -> &str {
        self.ships[id].name()
    }

    /// Whether `p` lies on the board.
    pub fn is_valid(&self, p: Point) -> bool {
        p.r < self.rows && p.c < self.cols
    }

    /// Uniform random in-bounds point.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(rng.random_range(0..self.rows), rng.random_range(0..self.cols))
    }

    /// Minimum ship length in the fleet.
    pub fn shortest_ship_length(&self) -> usize {
        self.ships.iter().map(|s| s.length()).min().unwrap_or(1)
    }

    /// Maximum ship length in the fleet.
    pub fn longest_ship_length(&self) -> usize {
        self.ships.iter().map(|s| s.length()).max().unwrap_or(1)
    }

    /// Cells occupied by a ship placed at `origin` with `orientation`, or
    /// `None` when the footprint leaves the board.
    pub fn footprint(
        &self,
        origin: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Option<Vec<Point>> {
        let length = self.ship(id)?.length();
        if !self.is_valid(origin) {
            return None;
        }
        // Subtract rather than add so extreme origins cannot overflow.
        match orientation {
            Orientation::Horizontal => {
                if length > self.cols - origin.c {
                    return None;
                }
                Some((0..length).map(|i| Point::new(origin.r, origin.c + i)).collect())
            }
            Orientation::Vertical => {
                if length > self.rows - origin.r {
                    return None;
                }
                Some((0..length).map(|i| Point::new(origin.r + i, origin.c)).collect())
            }
        }
    }
}
