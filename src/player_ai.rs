//! Automated player implementations, from a fixed sweep to the adaptive
//! striped hunter.

use crate::board::Board;
use crate::common::{AttackResult, Point};
use crate::config::Catalog;
use crate::player::Player;
use crate::ship::Orientation;
use crate::solver;
use crate::targeting::{HuntStrategy, Targeting};
use rand::rngs::SmallRng;

/// The weakest player: stacks its ships in the top-left corner and fires
/// in a fixed reverse row-major sweep, ignoring all feedback.
pub struct SweepPlayer {
    name: String,
    catalog: Catalog,
    last: Point,
}

impl SweepPlayer {
    pub fn new(name: &str, catalog: &Catalog) -> Self {
        Self {
            name: name.to_string(),
            catalog: catalog.clone(),
            last: Point::new(0, 0),
        }
    }
}

impl Player for SweepPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> bool {
        for k in 0..self.catalog.n_ships() {
            if board
                .place_ship(Point::new(k, 0), k, Orientation::Horizontal)
                .is_err()
            {
                return false;
            }
        }
        true
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Point {
        if self.last.c > 0 {
            self.last.c -= 1;
        } else {
            self.last.c = self.catalog.cols() - 1;
            if self.last.r > 0 {
                self.last.r -= 1;
            } else {
                self.last.r = self.catalog.rows() - 1;
            }
        }
        self.last
    }
}

/// Mid-strength player: blocked-board backtracking placement and a
/// uniform random hunt feeding the hunt/target machine.
pub struct ScatterPlayer {
    name: String,
    catalog: Catalog,
    targeting: Targeting,
}

impl ScatterPlayer {
    pub fn new(name: &str, catalog: &Catalog) -> Self {
        Self {
            name: name.to_string(),
            catalog: catalog.clone(),
            targeting: Targeting::new(catalog, HuntStrategy::Uniform),
        }
    }
}

impl Player for ScatterPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> bool {
        solver::place_all_blocked(board, &self.catalog, rng)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point {
        self.targeting.recommend(rng)
    }

    fn record_attack_result(&mut self, p: Point, result: AttackResult) {
        self.targeting.record(p, result);
    }
}

/// Strongest player: spaced randomized placement with backtracking
/// fallback, and the striped hunt pattern keyed to the shortest
/// surviving enemy ship.
pub struct StripePlayer {
    name: String,
    catalog: Catalog,
    targeting: Targeting,
}

impl StripePlayer {
    pub fn new(name: &str, catalog: &Catalog) -> Self {
        Self {
            name: name.to_string(),
            catalog: catalog.clone(),
            targeting: Targeting::new(catalog, HuntStrategy::Striped),
        }
    }
}

impl Player for StripePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> bool {
        solver::place_all_spaced(board, &self.catalog, rng)
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point {
        self.targeting.recommend(rng)
    }

    fn record_attack_result(&mut self, p: Point, result: AttackResult) {
        self.targeting.record(p, result);
    }
}

/// Construct a player by kind name: `"sweep"`, `"scatter"` or `"stripe"`.
pub fn create_player(kind: &str, name: &str, catalog: &Catalog) -> Option<Box<dyn Player>> {
    match kind {
        "sweep" => Some(Box::new(SweepPlayer::new(name, catalog))),
        "scatter" => Some(Box::new(ScatterPlayer::new(name, catalog))),
        "stripe" => Some(Box::new(StripePlayer::new(name, catalog))),
        _ => None,
    }
}
