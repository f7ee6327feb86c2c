pub mod game;

pub const TITLE_TEXT: &str = "START";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
