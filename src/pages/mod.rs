use color_eyre::eyre::Result;
use ratatui::{layout::Rect, Frame};
use strum::{Display, EnumString};
use tokio::sync::mpsc::UnboundedSender;

use crate::{action::Action, config::KeyBindings};

pub mod game;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PageId {
    Game,
}

pub trait Page {
    fn id(&self) -> PageId;

    #[allow(unused_variables)]
    fn register_keymap(&mut self, keybindings: &KeyBindings) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_id_parses_any_case() {
        assert_eq!("Game".parse::<PageId>().unwrap(), PageId::Game);
        assert_eq!("game".parse::<PageId>().unwrap(), PageId::Game);
        assert!("Home".parse::<PageId>().is_err());
    }
}
