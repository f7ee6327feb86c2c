use serde::Deserialize;
use strum::Display;

use crate::action::Action;

/// Actions a key can trigger on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize)]
pub enum GlobalAction {
    Quit,
    Suspend,
}

impl From<GlobalAction> for Action {
    fn from(action: GlobalAction) -> Self {
        match action {
            GlobalAction::Quit => Action::Quit,
            GlobalAction::Suspend => Action::Suspend,
        }
    }
}
