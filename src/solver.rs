//! Ship placement search: recursive backtracking plus the randomized
//! strategies built on top of it.

use crate::board::Board;
use crate::common::Point;
use crate::config::Catalog;
use crate::ship::Orientation;
use rand::Rng;

/// Rounds of block/search/unblock before the blocked strategy gives up.
const BLOCKED_ROUNDS: usize = 50;
/// Random origin draws per ship before the spaced strategy falls back.
const SPACED_TRIES: usize = 50;

/// Place every catalog ship on `board` by backtracking search. Ships are
/// taken in id order; ids already on the board are skipped, so callers may
/// pre-seed placements. A failed search leaves the board exactly as found.
pub fn place_all(board: &mut Board, catalog: &Catalog) -> bool {
    place_from(board, catalog, 0)
}

fn place_from(board: &mut Board, catalog: &Catalog, k: usize) -> bool {
    if k >= catalog.n_ships() {
        return true;
    }
    if board.is_placed(k) {
        return place_from(board, catalog, k + 1);
    }
    // Horizontal placements in row-major order first.
    for r in 0..catalog.rows() {
        for c in 0..catalog.cols() {
            let origin = Point::new(r, c);
            if board.place_ship(origin, k, Orientation::Horizontal).is_ok() {
                if place_from(board, catalog, k + 1) {
                    return true;
                }
                board
                    .unplace_ship(origin, k, Orientation::Horizontal)
                    .expect("just-placed ship must unplace");
            }
        }
    }
    // Then vertical placements in column-major order.
    for c in 0..catalog.cols() {
        for r in 0..catalog.rows() {
            let origin = Point::new(r, c);
            if board.place_ship(origin, k, Orientation::Vertical).is_ok() {
                if place_from(board, catalog, k + 1) {
                    return true;
                }
                board
                    .unplace_ship(origin, k, Orientation::Vertical)
                    .expect("just-placed ship must unplace");
            }
        }
    }
    false
}

/// Backtracking search run against a randomly half-blocked board, retried
/// up to a fixed budget. Blocking scatters the deterministic search's
/// placements between rounds; the overlay is removed before returning.
pub fn place_all_blocked<R: Rng + ?Sized>(
    board: &mut Board,
    catalog: &Catalog,
    rng: &mut R,
) -> bool {
    for _ in 0..BLOCKED_ROUNDS {
        board.block(rng);
        let placed = place_all(board, catalog);
        board.unblock();
        if placed {
            return true;
        }
    }
    false
}

/// Randomized greedy placement with a minimum-separation constraint: each
/// ship is dropped at a uniformly random origin and orientation, rejecting
/// footprints touching (even diagonally) a ship placed earlier in this
/// attempt. The separation is advisory; if the attempt fails the board is
/// cleared and the plain backtracking search runs instead.
pub fn place_all_spaced<R: Rng + ?Sized>(
    board: &mut Board,
    catalog: &Catalog,
    rng: &mut R,
) -> bool {
    let mut taken: Vec<Point> = Vec::new();
    let mut complete = true;
    'ships: for k in 0..catalog.n_ships() {
        for _ in 0..SPACED_TRIES {
            let origin = catalog.random_point(rng);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let Some(footprint) = catalog.footprint(origin, k, orientation) else {
                continue;
            };
            if footprint.iter().any(|p| touches_any(*p, &taken)) {
                continue;
            }
            if board.place_ship(origin, k, orientation).is_ok() {
                taken.extend_from_slice(&footprint);
                continue 'ships;
            }
        }
        complete = false;
        break;
    }
    if complete {
        return true;
    }
    board.clear();
    place_all(board, catalog)
}

fn touches_any(p: Point, taken: &[Point]) -> bool {
    taken.iter().any(|t| {
        p.r.abs_diff(t.r) <= 1 && p.c.abs_diff(t.c) <= 1
    })
}
