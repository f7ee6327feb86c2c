mod game;
mod global;

use strum::Display;

pub use crate::action::{game::GameAction, global::GlobalAction};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    // Game clock
    FrameTick,
    SpawnPipes,
    // Page actions
    Game(GameAction),
}

impl Action {
    /// High-frequency actions, kept out of the debug log.
    pub fn is_periodic(&self) -> bool {
        matches!(self, Action::Render | Action::FrameTick | Action::SpawnPipes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_periodic_actions() {
        assert!(Action::FrameTick.is_periodic());
        assert!(Action::SpawnPipes.is_periodic());
        assert!(!Action::Game(GameAction::Confirm).is_periodic());
        assert!(!Action::Quit.is_periodic());
    }

    #[test]
    fn test_global_actions_map_to_app_actions() {
        assert_eq!(Action::from(GlobalAction::Quit), Action::Quit);
        assert_eq!(Action::from(GlobalAction::Suspend), Action::Suspend);
        assert!(serde_yaml::from_str::<GlobalAction>("FrameTick").is_err());
    }
}
