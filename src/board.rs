//! Game board state: the authoritative grid, ship registry and attack
//! resolution.

use crate::common::{AttackOutcome, BoardError, Point, ShipId};
use crate::config::Catalog;
use crate::ship::{Orientation, EMPTY_SYMBOL, HIT_SYMBOL, MISS_SYMBOL};
use rand::Rng;
use std::fmt::Write as _;

/// State of one grid cell. Transitions during play are one-directional:
/// `Occupied -> Hit` and `Empty -> Miss`; `Empty <-> Occupied` only during
/// the placement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(ShipId),
    Hit,
    Miss,
}

/// One player's board: a grid of cells, the set of ships currently placed
/// and a reversible blocked overlay used by placement heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    catalog: Catalog,
    grid: Vec<Cell>,
    blocked: Vec<bool>,
    placed: Vec<ShipId>,
}

impl Board {
    /// Create an empty board for the given catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let cells = catalog.rows() * catalog.cols();
        Board {
            catalog: catalog.clone(),
            grid: vec![Cell::Empty; cells],
            blocked: vec![false; cells],
            placed: Vec::new(),
        }
    }

    fn index(&self, p: Point) -> usize {
        p.r * self.catalog.cols() + p.c
    }

    /// Cell state at `p`, or `None` when out of bounds.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        if !self.catalog.is_valid(p) {
            return None;
        }
        Some(self.grid[self.index(p)])
    }

    /// Ids of ships currently placed and not yet destroyed.
    pub fn placed_ships(&self) -> &[ShipId] {
        &self.placed
    }

    /// Whether `id` is currently on the board.
    pub fn is_placed(&self, id: ShipId) -> bool {
        self.placed.contains(&id)
    }

    /// `true` once every placed ship has been destroyed.
    pub fn all_ships_destroyed(&self) -> bool {
        self.placed.is_empty()
    }

    /// Reset to an empty board.
    pub fn clear(&mut self) {
        self.grid.fill(Cell::Empty);
        self.blocked.fill(false);
        self.placed.clear();
    }

    /// Mark a random half of the currently empty cells as blocked. Blocked
    /// cells reject placement until [`Board::unblock`] runs; non-empty
    /// cells are never blocked.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty = self
            .grid
            .iter()
            .zip(self.blocked.iter())
            .filter(|(cell, blocked)| **cell == Cell::Empty && !**blocked)
            .count();
        let mut remaining = empty / 2;
        while remaining > 0 {
            let p = self.catalog.random_point(rng);
            let i = self.index(p);
            if self.grid[i] == Cell::Empty && !self.blocked[i] {
                self.blocked[i] = true;
                remaining -= 1;
            }
        }
    }

    /// Remove every blocked mark, restoring the exact pre-block state.
    pub fn unblock(&mut self) {
        self.blocked.fill(false);
    }

    /// Place ship `id` with its origin cell at `origin`, extending right
    /// (horizontal) or down (vertical). A failed call leaves the board
    /// unchanged.
    pub fn place_ship(
        &mut self,
        origin: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if id >= self.catalog.n_ships() {
            return Err(BoardError::InvalidIndex);
        }
        if self.is_placed(id) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let footprint = self
            .catalog
            .footprint(origin, id, orientation)
            .ok_or(BoardError::ShipOutOfBounds)?;
        for &p in &footprint {
            let i = self.index(p);
            if self.grid[i] != Cell::Empty || self.blocked[i] {
                return Err(BoardError::ShipOverlaps);
            }
        }
        for &p in &footprint {
            let i = self.index(p);
            self.grid[i] = Cell::Occupied(id);
        }
        self.placed.push(id);
        Ok(())
    }

    /// Remove ship `id`, reverting exactly its footprint to empty. The
    /// stated origin and orientation must match the actual placement.
    pub fn unplace_ship(
        &mut self,
        origin: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if id >= self.catalog.n_ships() {
            return Err(BoardError::InvalidIndex);
        }
        if !self.is_placed(id) {
            return Err(BoardError::ShipNotPlaced);
        }
        let footprint = self
            .catalog
            .footprint(origin, id, orientation)
            .ok_or(BoardError::PlacementMismatch)?;
        for &p in &footprint {
            if self.grid[self.index(p)] != Cell::Occupied(id) {
                return Err(BoardError::PlacementMismatch);
            }
        }
        for &p in &footprint {
            let i = self.index(p);
            self.grid[i] = Cell::Empty;
        }
        self.placed.retain(|&s| s != id);
        Ok(())
    }

    /// Resolve an attack at `p`. Out-of-bounds or already-attacked cells
    /// fail with no state change; otherwise the cell becomes a hit or a
    /// miss and the owning ship is checked for destruction.
    pub fn attack(&mut self, p: Point) -> Result<AttackOutcome, BoardError> {
        if !self.catalog.is_valid(p) {
            return Err(BoardError::OutOfBounds);
        }
        let i = self.index(p);
        match self.grid[i] {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyAttacked),
            Cell::Empty => {
                self.grid[i] = Cell::Miss;
                Ok(AttackOutcome::Miss)
            }
            Cell::Occupied(id) => {
                self.grid[i] = Cell::Hit;
                if self.grid.iter().any(|&cell| cell == Cell::Occupied(id)) {
                    Ok(AttackOutcome::Hit)
                } else {
                    self.placed.retain(|&s| s != id);
                    Ok(AttackOutcome::Sunk(id))
                }
            }
        }
    }

    /// Render the board as text. With `shots_only`, ship cells are shown
    /// as empty so an opponent sees only hits and misses. The blocked
    /// overlay is placement scaffolding and never rendered.
    pub fn render(&self, shots_only: bool) -> String {
        let mut out = String::new();
        out.push_str("  ");
        for c in 0..self.catalog.cols() {
            let _ = write!(out, "{}", c % 10);
        }
        out.push('\n');
        for r in 0..self.catalog.rows() {
            let _ = write!(out, "{} ", r % 10);
            for c in 0..self.catalog.cols() {
                let symbol = match self.grid[r * self.catalog.cols() + c] {
                    Cell::Hit => HIT_SYMBOL,
                    Cell::Miss => MISS_SYMBOL,
                    Cell::Empty => EMPTY_SYMBOL,
                    Cell::Occupied(id) if !shots_only => self.catalog.ship_symbol(id),
                    Cell::Occupied(_) => EMPTY_SYMBOL,
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}
