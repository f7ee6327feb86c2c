use std::collections::HashMap;

use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{
    de::{self, Deserializer},
    Deserialize,
};

use crate::{
    action::{Action, GameAction, GlobalAction},
    pages::PageId,
};

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    pub fn new() -> Result<Self> {
        let default_config: Config = serde_yaml::from_str(CONFIG).wrap_err("built-in config.yaml is invalid")?;
        let config_file = crate::utils::get_config_dir().join("config.yaml");
        let builder = config::Config::builder()
            .add_source(config::File::from(config_file.clone()).format(config::FileFormat::Yaml).required(false));
        if !config_file.exists() {
            log::info!("No user configuration at {}, using the built-in key map", config_file.display());
        }

        let mut cfg: Self = builder
            .build()?
            .try_deserialize()
            .wrap_err_with(|| format!("failed to read {}", config_file.display()))?;
        cfg.keybindings.merge_defaults(default_config.keybindings);

        Ok(cfg)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct KeyMap(pub HashMap<KeyEvent, Action>);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyBindings {
    pub global: KeyMap,
    pub pages: HashMap<PageId, KeyMap>,
}

impl KeyBindings {
    /// Fills in every default binding the user did not set.
    pub fn merge_defaults(&mut self, defaults: KeyBindings) {
        for (key, action) in defaults.global.0 {
            self.global.entry(key).or_insert(action);
        }
        for (page, default_map) in defaults.pages {
            let user_map = self.pages.entry(page).or_default();
            for (key, action) in default_map.0 {
                user_map.entry(key).or_insert(action);
            }
        }
    }

    /// Global bindings win over page bindings.
    pub fn lookup(&self, page: &PageId, key: &KeyEvent) -> Option<&Action> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.global.get(&key).or_else(|| self.pages.get(page).and_then(|keymap| keymap.get(&key)))
    }

    /// Label of a key that triggers `action` on `page`, picked deterministically if several do.
    /// Keys taken by a global binding never reach the page and are skipped.
    pub fn key_label(&self, page: &PageId, action: &Action) -> Option<String> {
        self.pages
            .get(page)?
            .iter()
            .filter(|(key, bound)| *bound == action && !self.global.contains_key(*key))
            .map(|(key, _)| key_event_to_string(key))
            .min()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawKeyBindings {
    #[serde(default)]
    global: HashMap<String, String>,
    #[serde(default)]
    pages: HashMap<String, HashMap<String, String>>,
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawKeyBindings::deserialize(deserializer)?;

        let global = parse_key_map(&raw.global, |name| serde_yaml::from_str::<GlobalAction>(name).map(Action::from))
            .map_err(<D::Error as de::Error>::custom)?;
        let pages = raw
            .pages
            .iter()
            .map(|(page, bindings)| {
                let page_id: PageId = page
                    .parse()
                    .map_err(|_| <D::Error as de::Error>::custom(format!("unknown page `{page}`")))?;
                let keymap = match page_id {
                    PageId::Game => {
                        parse_key_map(bindings, |name| serde_yaml::from_str::<GameAction>(name).map(Action::Game))
                    },
                }
                .map_err(<D::Error as de::Error>::custom)?;
                Ok((page_id, keymap))
            })
            .collect::<Result<_, D::Error>>()?;

        Ok(KeyBindings { global, pages })
    }
}

fn parse_key_map<F>(raw: &HashMap<String, String>, parse_action: F) -> Result<KeyMap, String>
where
    F: Fn(&str) -> Result<Action, serde_yaml::Error>,
{
    raw.iter()
        .map(|(key, name)| {
            let event = parse_key_event(key)?;
            let action = parse_action(name).map_err(|e| format!("unknown action `{name}`: {e}"))?;
            Ok((event, action))
        })
        .collect::<Result<HashMap<_, _>, String>>()
        .map(KeyMap)
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('<').and_then(|s| s.strip_suffix('>')).unwrap_or(inner);
    if inner.is_empty() || inner.contains(['<', '>']) {
        return Err(format!("Unable to parse `{raw}`"));
    }

    let lower = inner.to_ascii_lowercase();
    let (name, modifiers) = split_modifiers(&lower);
    parse_key_code(name, modifiers).ok_or_else(|| format!("Unable to parse `{raw}`"))
}

fn split_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = raw;
    loop {
        if let Some(tail) = rest.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            rest = tail;
        } else {
            break;
        }
    }
    (rest, modifiers)
}

fn parse_key_code(name: &str, modifiers: KeyModifiers) -> Option<KeyEvent> {
    let code = match name {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "minus" | "hyphen" => KeyCode::Char('-'),
        name if name.chars().count() == 1 => {
            let c = name.chars().next()?;
            KeyCode::Char(if modifiers.contains(KeyModifiers::SHIFT) { c.to_ascii_uppercase() } else { c })
        },
        name => {
            let n = name.strip_prefix('f')?.parse::<u8>().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        },
    };
    Some(KeyEvent::new(code, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => String::new(),
    };

    let mut parts = Vec::with_capacity(4);
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key_event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if key_event.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    parts.push(code);
    parts.join("-")
}
