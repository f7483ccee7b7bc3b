//! Adaptive attack selection: the hunt/target state machine used by the
//! automated players.

use crate::common::{AttackResult, Point};
use crate::config::Catalog;
use rand::Rng;

/// Abort the chase if candidate accumulation ever runs away.
const CANDIDATE_LIMIT: usize = 200;

/// How a player searches while no hit is being chased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntStrategy {
    /// Uniform random draw from the undiscovered cells.
    Uniform,
    /// Deterministic scan with a stride equal to the shortest surviving
    /// ship's length, rows diagonally staggered so every placement of
    /// that ship crosses the pattern.
    Striped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Hunt,
    Target,
}

/// Per-player targeting state against one opponent board. Tracks the cells
/// not yet attacked, the current hunt/target mode and the candidate queue
/// being chased.
#[derive(Debug, Clone)]
pub struct Targeting {
    rows: usize,
    cols: usize,
    lengths: Vec<usize>,
    destroyed: Vec<bool>,
    strategy: HuntStrategy,
    undiscovered: Vec<Point>,
    mode: Mode,
    candidates: Vec<Point>,
    shortest: usize,
    radius: usize,
    probe: Point,
    first_hit: Point,
}

impl Targeting {
    pub fn new(catalog: &Catalog, strategy: HuntStrategy) -> Self {
        let mut undiscovered = Vec::with_capacity(catalog.rows() * catalog.cols());
        for r in 0..catalog.rows() {
            for c in 0..catalog.cols() {
                undiscovered.push(Point::new(r, c));
            }
        }
        let lengths: Vec<usize> = (0..catalog.n_ships())
            .map(|id| catalog.ship_length(id))
            .collect();
        Targeting {
            rows: catalog.rows(),
            cols: catalog.cols(),
            destroyed: vec![false; lengths.len()],
            strategy,
            undiscovered,
            mode: Mode::Hunt,
            candidates: Vec::new(),
            shortest: catalog.shortest_ship_length(),
            // The chase never needs to look further from the first hit
            // than the longest ship extends.
            radius: catalog.longest_ship_length().saturating_sub(1).max(1),
            probe: Point::new(0, 0),
            first_hit: Point::new(0, 0),
            lengths,
        }
    }

    /// Whether the machine is hunting (no unresolved hit being chased).
    pub fn is_hunting(&self) -> bool {
        self.mode == Mode::Hunt
    }

    /// Cells not yet attacked by this player.
    pub fn undiscovered(&self) -> &[Point] {
        &self.undiscovered
    }

    fn is_undiscovered(&self, p: Point) -> bool {
        self.undiscovered.contains(&p)
    }

    /// Choose the next cell to attack. Never returns a previously attacked
    /// cell. Must not be called once every cell has been attacked.
    pub fn recommend<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Point {
        debug_assert!(!self.undiscovered.is_empty());
        if self.mode == Mode::Target {
            if self.candidates.len() > CANDIDATE_LIMIT {
                self.candidates.clear();
                self.mode = Mode::Hunt;
            } else {
                while let Some(p) = self.candidates.pop() {
                    if self.is_undiscovered(p) {
                        return p;
                    }
                }
                self.mode = Mode::Hunt;
            }
        }
        self.hunt(rng)
    }

    fn hunt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Point {
        match self.strategy {
            HuntStrategy::Uniform => {
                let i = rng.random_range(0..self.undiscovered.len());
                self.undiscovered[i]
            }
            HuntStrategy::Striped => self.striped_probe(),
        }
    }

    /// Advance the scan cursor to the next undiscovered stripe cell. The
    /// stride follows the shortest surviving ship's length, widening as
    /// short ships are sunk.
    fn striped_probe(&mut self) -> Point {
        let stride = self.shortest.max(1);
        while !self.is_undiscovered(self.probe) {
            self.probe.c += stride;
            if self.probe.c >= self.cols {
                self.probe.r += 1;
                if self.probe.r >= self.rows {
                    // Cursor ran off the board: everything on the stripe
                    // is spent, fall back to the first untouched cell.
                    return self.undiscovered[0];
                }
                self.probe.c = 0;
                while (self.probe.c + self.probe.r) % stride != 0 {
                    self.probe.c += 1;
                }
            }
        }
        self.probe
    }

    /// Fold the outcome of this player's own attack into the state.
    pub fn record(&mut self, p: Point, result: AttackResult) {
        if result == AttackResult::Invalid {
            return;
        }
        let before = self.undiscovered.len();
        self.undiscovered.retain(|&q| q != p);
        debug_assert_eq!(before, self.undiscovered.len() + 1, "cell recorded twice");

        if let AttackResult::Sunk(id) = result {
            if let Some(slot) = self.destroyed.get_mut(id) {
                *slot = true;
            }
            self.recompute_shortest();
        }

        match self.mode {
            Mode::Hunt => {
                if result == AttackResult::Hit {
                    self.mode = Mode::Target;
                    self.first_hit = p;
                    self.seed_candidates(p);
                }
            }
            Mode::Target => match result {
                AttackResult::Sunk(_) => {
                    self.candidates.clear();
                    self.mode = Mode::Hunt;
                }
                AttackResult::Hit => {
                    self.extend_axis(p);
                }
                AttackResult::Miss | AttackResult::Invalid => {}
            },
        }

        // Adjacent enemy ships can strand a chase with nothing left to
        // try; resume hunting rather than stalling.
        if self.mode == Mode::Target && self.candidates.is_empty() {
            self.mode = Mode::Hunt;
        }
    }

    /// Queue the cells extending from the first hit in all four cardinal
    /// directions, out to the chase radius. Farthest cells are pushed
    /// first so the LIFO pop tries neighbors of the hit before outliers.
    fn seed_candidates(&mut self, p: Point) {
        for dist in (1..=self.radius).rev() {
            let ring = [
                (p.c + dist < self.cols).then(|| Point::new(p.r, p.c + dist)),
                (p.r + dist < self.rows).then(|| Point::new(p.r + dist, p.c)),
                p.c.checked_sub(dist).map(|c| Point::new(p.r, c)),
                p.r.checked_sub(dist).map(|r| Point::new(r, p.c)),
            ];
            for candidate in ring.into_iter().flatten() {
                if self.is_undiscovered(candidate) {
                    self.candidates.push(candidate);
                }
            }
        }
    }

    /// A second hit fixes the ship's axis: queue the next cell past `p`
    /// away from the first hit, if it stays in bounds and within radius.
    fn extend_axis(&mut self, p: Point) {
        let next = if p.r == self.first_hit.r {
            if p.c > self.first_hit.c {
                (p.c - self.first_hit.c + 1 <= self.radius && p.c + 1 < self.cols)
                    .then(|| Point::new(p.r, p.c + 1))
            } else {
                (self.first_hit.c - p.c + 1 <= self.radius)
                    .then(|| p.c.checked_sub(1).map(|c| Point::new(p.r, c)))
                    .flatten()
            }
        } else if p.r > self.first_hit.r {
            (p.r - self.first_hit.r + 1 <= self.radius && p.r + 1 < self.rows)
                .then(|| Point::new(p.r + 1, p.c))
        } else {
            (self.first_hit.r - p.r + 1 <= self.radius)
                .then(|| p.r.checked_sub(1).map(|r| Point::new(r, p.c)))
                .flatten()
        };
        if let Some(next) = next {
            if self.is_undiscovered(next) {
                self.candidates.push(next);
            }
        }
    }

    fn recompute_shortest(&mut self) {
        let alive = self
            .lengths
            .iter()
            .zip(self.destroyed.iter())
            .filter(|(_, destroyed)| !**destroyed)
            .map(|(len, _)| *len)
            .min();
        if let Some(shortest) = alive {
            self.shortest = shortest;
        }
    }
}
