//! Command implementations

pub mod inspect;
pub mod new_game;
pub mod play;
pub mod score;

pub use inspect::{InspectReport, RowReport, inspect_board};
pub use new_game::new_board;
pub use play::run_play;
pub use score::score_codes;
