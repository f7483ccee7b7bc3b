use flotilla::{AttackOutcome, Board, BoardError, Catalog, Cell, Orientation, Point};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn small_catalog() -> Catalog {
    let mut catalog = Catalog::new(5, 5).unwrap();
    catalog.add_ship("Cruiser", 'C', 3).unwrap();
    catalog
}

#[test]
fn test_attack_and_sink_scenario() {
    // 5x5 board, one length-3 ship horizontal at row 0, cols 0-2.
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();

    assert_eq!(board.attack(Point::new(0, 0)).unwrap(), AttackOutcome::Hit);
    assert_eq!(board.attack(Point::new(0, 1)).unwrap(), AttackOutcome::Hit);
    assert_eq!(
        board.attack(Point::new(0, 2)).unwrap(),
        AttackOutcome::Sunk(0)
    );
    assert!(board.all_ships_destroyed());
}

#[test]
fn test_placement_out_of_bounds() {
    // Length-4 ship at column 2 of a 4-column board: 2 + 4 > 4.
    let mut catalog = Catalog::new(4, 4).unwrap();
    catalog.add_ship("Battleship", 'B', 4).unwrap();
    let mut board = Board::new(&catalog);
    assert_eq!(
        board.place_ship(Point::new(0, 2), 0, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    // A failed placement leaves the board untouched.
    assert_eq!(board, Board::new(&catalog));
}

#[test]
fn test_placement_extreme_origin_is_an_error() {
    // Origins near usize::MAX must fail cleanly, not wrap around the
    // bounds arithmetic.
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    for origin in [
        Point::new(0, usize::MAX),
        Point::new(usize::MAX, 0),
        Point::new(usize::MAX, usize::MAX),
        Point::new(0, usize::MAX - 1),
    ] {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            assert_eq!(
                board.place_ship(origin, 0, orientation),
                Err(BoardError::ShipOutOfBounds)
            );
        }
    }
    assert_eq!(board, Board::new(&catalog));
    // The shared footprint check guards unplacement the same way.
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.unplace_ship(Point::new(0, usize::MAX), 0, Orientation::Horizontal),
        Err(BoardError::PlacementMismatch)
    );
}

#[test]
fn test_placement_exclusivity() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(2, 1), 0, Orientation::Horizontal)
        .unwrap();
    for c in 0..5 {
        for r in 0..5 {
            let p = Point::new(r, c);
            let expected = if r == 2 && (1..=3).contains(&c) {
                Cell::Occupied(0)
            } else {
                Cell::Empty
            };
            assert_eq!(board.cell(p), Some(expected));
        }
    }
}

#[test]
fn test_place_rejects_duplicates_and_overlap() {
    let mut catalog = Catalog::new(5, 5).unwrap();
    catalog.add_ship("Cruiser", 'C', 3).unwrap();
    catalog.add_ship("Destroyer", 'D', 2).unwrap();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(1, 1), 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place_ship(Point::new(4, 0), 0, Orientation::Horizontal),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        board.place_ship(Point::new(0, 2), 1, Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place_ship(Point::new(0, 0), 2, Orientation::Horizontal),
        Err(BoardError::InvalidIndex)
    );
}

#[test]
fn test_unplace_roundtrip() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    let before = board.clone();
    board
        .place_ship(Point::new(1, 2), 0, Orientation::Vertical)
        .unwrap();
    board
        .unplace_ship(Point::new(1, 2), 0, Orientation::Vertical)
        .unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_unplace_guards_mismatched_footprint() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    assert_eq!(
        board.unplace_ship(Point::new(0, 0), 0, Orientation::Horizontal),
        Err(BoardError::ShipNotPlaced)
    );
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    // Wrong direction and wrong origin both fail without mutation.
    let placed = board.clone();
    assert_eq!(
        board.unplace_ship(Point::new(0, 0), 0, Orientation::Vertical),
        Err(BoardError::PlacementMismatch)
    );
    assert_eq!(
        board.unplace_ship(Point::new(0, 1), 0, Orientation::Horizontal),
        Err(BoardError::PlacementMismatch)
    );
    assert_eq!(board, placed);
}

#[test]
fn test_attack_idempotence() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    board.attack(Point::new(0, 0)).unwrap();
    board.attack(Point::new(3, 3)).unwrap();
    let after = board.clone();
    assert_eq!(
        board.attack(Point::new(0, 0)),
        Err(BoardError::AlreadyAttacked)
    );
    assert_eq!(
        board.attack(Point::new(3, 3)),
        Err(BoardError::AlreadyAttacked)
    );
    assert_eq!(board.attack(Point::new(9, 9)), Err(BoardError::OutOfBounds));
    assert_eq!(board, after);
}

#[test]
fn test_destruction_is_monotonic() {
    let mut catalog = Catalog::new(5, 5).unwrap();
    catalog.add_ship("Cruiser", 'C', 3).unwrap();
    catalog.add_ship("Destroyer", 'D', 2).unwrap();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(Point::new(2, 0), 1, Orientation::Horizontal)
        .unwrap();

    board.attack(Point::new(2, 0)).unwrap();
    assert_eq!(
        board.attack(Point::new(2, 1)).unwrap(),
        AttackOutcome::Sunk(1)
    );
    assert!(!board.is_placed(1));
    assert!(!board.all_ships_destroyed());
    // The destroyed ship's cells can never report a hit again.
    assert_eq!(
        board.attack(Point::new(2, 0)),
        Err(BoardError::AlreadyAttacked)
    );
}

#[test]
fn test_block_unblock_inverse() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    let mut rng = SmallRng::seed_from_u64(7);
    let before = board.clone();
    board.block(&mut rng);
    board.unblock();
    assert_eq!(board, before);
}

#[test]
fn test_blocked_cells_reject_placement() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    let mut rng = SmallRng::seed_from_u64(3);
    board.block(&mut rng);
    let blocked_before = board.clone();
    let mut rejected = 0;
    for r in 0..5 {
        for c in 0..5 {
            let origin = Point::new(r, c);
            if board.place_ship(origin, 0, Orientation::Horizontal).is_ok() {
                board
                    .unplace_ship(origin, 0, Orientation::Horizontal)
                    .unwrap();
            } else {
                rejected += 1;
            }
            assert_eq!(board, blocked_before);
        }
    }
    // 12 of 25 cells are blocked, so some footprints must have failed.
    assert!(rejected > 0);
}

#[test]
fn test_render_shots_only_hides_ships() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    board.attack(Point::new(0, 0)).unwrap();
    board.attack(Point::new(4, 4)).unwrap();

    let full = board.render(false);
    assert!(full.contains('C'));
    assert!(full.contains('X'));
    assert!(full.contains('o'));

    let shots = board.render(true);
    assert!(!shots.contains('C'));
    assert!(shots.contains('X'));
    assert!(shots.contains('o'));
}

#[test]
fn test_clear_resets_everything() {
    let catalog = small_catalog();
    let mut board = Board::new(&catalog);
    board
        .place_ship(Point::new(0, 0), 0, Orientation::Horizontal)
        .unwrap();
    board.attack(Point::new(0, 0)).unwrap();
    board.attack(Point::new(4, 0)).unwrap();
    board.clear();
    assert_eq!(board, Board::new(&catalog));
}
