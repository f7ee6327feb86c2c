use serde::Deserialize;
use strum::Display;

/// The single gameplay input. Its meaning depends on the current game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize)]
pub enum GameAction {
    Confirm,
}
