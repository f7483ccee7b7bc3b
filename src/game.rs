//! Match runner: alternates turns between two players until one fleet is
//! destroyed. All narration goes through the `log` facade; callers that
//! want a picture of a board render it themselves.

use crate::board::Board;
use crate::common::{AttackResult, BoardError};
use crate::config::Catalog;
use crate::player::Player;
use rand::rngs::SmallRng;

/// Result of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Index of the winning player: 0 for the first, 1 for the second.
    pub winner: usize,
    /// Total attacks made across both players.
    pub turns: usize,
}

/// Run one match. Returns `None` when either player fails to place its
/// fleet; otherwise plays until one side's ships are all destroyed.
pub fn play(
    catalog: &Catalog,
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    rng: &mut SmallRng,
) -> Option<MatchOutcome> {
    let mut b1 = Board::new(catalog);
    let mut b2 = Board::new(catalog);
    if !p1.place_ships(rng, &mut b1) {
        log::warn!("{} failed to place its fleet", p1.name());
        return None;
    }
    if !p2.place_ships(rng, &mut b2) {
        log::warn!("{} failed to place its fleet", p2.name());
        return None;
    }

    let mut turns = 0;
    loop {
        turns += 1;
        if take_turn(catalog, p1, p2, &mut b2, rng) {
            log::info!("{} wins after {} attacks", p1.name(), turns);
            return Some(MatchOutcome { winner: 0, turns });
        }
        turns += 1;
        if take_turn(catalog, p2, p1, &mut b1, rng) {
            log::info!("{} wins after {} attacks", p2.name(), turns);
            return Some(MatchOutcome { winner: 1, turns });
        }
    }
}

/// One attack by `attacker` against `defender`'s board. Returns `true`
/// when the attack destroyed the last ship.
fn take_turn(
    catalog: &Catalog,
    attacker: &mut dyn Player,
    defender: &mut dyn Player,
    board: &mut Board,
    rng: &mut SmallRng,
) -> bool {
    let p = attacker.recommend_attack(rng);
    let result = match board.attack(p) {
        Ok(outcome) => {
            log::debug!(
                "{} attacked ({},{}): {:?}",
                attacker.name(),
                p.r,
                p.c,
                outcome
            );
            if let crate::common::AttackOutcome::Sunk(id) = outcome {
                log::debug!("{} destroyed the {}", attacker.name(), catalog.ship_name(id));
            }
            AttackResult::from(outcome)
        }
        Err(e @ (BoardError::OutOfBounds | BoardError::AlreadyAttacked)) => {
            // A wasted turn, not a fatal error.
            log::debug!("{} wasted a shot at ({},{}): {}", attacker.name(), p.r, p.c, e);
            AttackResult::Invalid
        }
        Err(e) => {
            log::warn!("unexpected attack failure at ({},{}): {}", p.r, p.c, e);
            AttackResult::Invalid
        }
    };
    if board.all_ships_destroyed() {
        return true;
    }
    attacker.record_attack_result(p, result);
    defender.record_attack_by_opponent(p);
    false
}
