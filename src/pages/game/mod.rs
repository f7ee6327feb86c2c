mod bird;
mod clock;
mod object;
mod pipe;
mod render;
mod session;
mod spawner;

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

pub use self::{
    object::{Bounds, Object},
    session::GameState,
};
use super::{Page, PageId};
use crate::{
    action::{Action, GameAction},
    assets::Sprites,
    config::KeyBindings,
    constants::game::{FRAME_RATE, SPAWN_INTERVAL},
    pages::game::{clock::GameClock, session::Session, spawner::spawn_pair},
};

const DEFAULT_CONFIRM_LABEL: &str = "SPACE";

pub struct GamePage {
    session: Session<GameClock>,
    sprites: Sprites,
    confirm_label: String,
    rng: StdRng,
}

impl GamePage {
    pub fn new(sprites: Sprites) -> Self {
        GamePage {
            session: Session::new(GameClock::new(FRAME_RATE, SPAWN_INTERVAL)),
            sprites,
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.session.state()
    }
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
    }

    fn register_keymap(&mut self, keybindings: &KeyBindings) -> Result<()> {
        if let Some(label) = keybindings.key_label(&self.id(), &Action::Game(GameAction::Confirm)) {
            self.confirm_label = label.to_uppercase();
        }
        debug!("Confirm key shown as {}", self.confirm_label);
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.session.clock_mut().register_action_handler(tx);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Game(GameAction::Confirm) => {
                self.session.handle_confirm();
                Ok(Some(Action::Render))
            },
            Action::FrameTick => {
                self.session.update();
                Ok(Some(Action::Render))
            },
            Action::SpawnPipes => {
                let pair = spawn_pair(&mut self.rng);
                trace!("Spawning pipes at y={}", pair[0].bounds().y);
                self.session.place_pipes(pair);
                Ok(None)
            },
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        render::draw(f, area, &self.session, &self.sprites, &self.confirm_label);
        Ok(())
    }
}
