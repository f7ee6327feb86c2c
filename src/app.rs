use color_eyre::eyre::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::Action,
    assets::Sprites,
    config::Config,
    pages::{game::GamePage, Page},
    tui::{self, Tui},
};

pub struct App {
    config: Config,
    should_quit: bool,
    should_suspend: bool,
    page: Box<dyn Page>,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::new()?;
        let sprites = Sprites::load()?;

        Ok(Self::with_page(config, Box::new(GamePage::new(sprites))))
    }

    fn with_page(config: Config, page: Box<dyn Page>) -> Self {
        Self { config, should_quit: false, should_suspend: false, page }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = Tui::new()?;
        tui.enter()?;

        self.page.register_keymap(&self.config.keybindings)?;
        self.page.register_action_handler(action_tx.clone())?;
        self.page.init()?;

        loop {
            // Clock ticks arrive on the action channel, input on the terminal's event channel.
            tokio::select! {
                event = tui.next() => match event {
                    Some(event) => self.handle_event(event, &action_tx)?,
                    None => break,
                },
                Some(action) = action_rx.recv() => self.handle_action(action, &mut tui, &action_tx)?,
            }

            while let Ok(action) = action_rx.try_recv() {
                self.handle_action(action, &mut tui, &action_tx)?;
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: tui::Event, action_tx: &UnboundedSender<Action>) -> Result<()> {
        match event {
            tui::Event::Init | tui::Event::FocusGained => action_tx.send(Action::Render)?,
            tui::Event::Resize(w, h) => action_tx.send(Action::Resize(w, h))?,
            tui::Event::Error => action_tx.send(Action::Error("Failed to read terminal input".to_string()))?,
            tui::Event::Key(key) => {
                if let Some(action) = self.config.keybindings.lookup(&self.page.id(), &key) {
                    log::info!("Got action: {action:?}");
                    action_tx.send(action.clone())?;
                }
            },
            tui::Event::FocusLost => {},
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        match &action {
            Action::Resize(w, h) => {
                tui.resize(Rect::new(0, 0, *w, *h))?;
                self.render(tui, action_tx)?;
            },
            Action::Render => self.render(tui, action_tx)?,
            _ => {},
        }
        self.dispatch(action, action_tx)
    }

    /// The part of action handling that does not touch the terminal.
    fn dispatch(&mut self, action: Action, action_tx: &UnboundedSender<Action>) -> Result<()> {
        if !action.is_periodic() {
            log::debug!("{action:?}");
        }
        match &action {
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Error(message) => log::error!("{message}"),
            _ => {},
        }
        if let Some(action) = self.page.update(action)? {
            action_tx.send(action)?;
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        let mut result = Ok(());
        tui.draw(|f| {
            let area = f.area();
            let border = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(Color::Black));
            f.render_widget(border, area);

            result = self.page.draw(f, area.inner(Margin { horizontal: 1, vertical: 1 }));
        })?;

        if let Err(e) = result {
            action_tx.send(Action::Error(format!("Failed to draw: {e:?}")))?;
        }
        Ok(())
    }
}
