//! Player capability interface.

use crate::board::Board;
use crate::common::{AttackResult, Point};
use rand::rngs::SmallRng;

/// Interface implemented by different player types. Implementations keep
/// whatever per-game state their strategy needs; the match runner owns the
/// randomness source and passes it into every randomized decision.
pub trait Player {
    /// The player's display name.
    fn name(&self) -> &str;

    /// Whether this player is driven by human input. Automated players
    /// report `false`; the match runner may use this to pick which board
    /// view to show.
    fn is_human(&self) -> bool {
        false
    }

    /// Place all catalog ships onto the provided board. Returns `false`
    /// when no full placement could be found.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> bool;

    /// Choose the next cell to attack on the opponent board.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Point;

    /// Inform the player of the result of its own attack.
    fn record_attack_result(&mut self, _p: Point, _result: AttackResult) {}

    /// Inform the player of an opponent attack against its board.
    fn record_attack_by_opponent(&mut self, _p: Point) {}
}
