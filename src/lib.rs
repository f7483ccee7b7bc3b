mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_ai;
mod ship;
pub mod solver;
mod targeting;

pub use board::{Board, Cell};
pub use common::{AttackOutcome, AttackResult, BoardError, Point, ShipId};
pub use config::{Catalog, MAX_COLS, MAX_ROWS};
pub use game::{play, MatchOutcome};
pub use logging::init_logging;
pub use player::Player;
pub use player_ai::{create_player, ScatterPlayer, StripePlayer, SweepPlayer};
pub use ship::{Orientation, ShipType, EMPTY_SYMBOL, HIT_SYMBOL, MISS_SYMBOL};
pub use targeting::{HuntStrategy, Targeting};
