use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::apps::SIDEBAR_APPS;

/// Number of workspaces reachable from the keyboard.
pub const WORKSPACE_KEYS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Quit,
    ToggleHelp,
    // Launcher: index into the sidebar catalog
    OpenApp(usize),
    SwitchWorkspace(u32),
    // Focused window
    MinimizeFocused,
    ToggleMaximizeFocused,
    CloseFocused,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "Quit"),
            Action::ToggleHelp => write!(f, "Toggle help"),
            Action::OpenApp(idx) => match SIDEBAR_APPS.get(*idx) {
                Some(app) => write!(f, "Open {}", app.label),
                None => write!(f, "Open app #{idx}"),
            },
            Action::SwitchWorkspace(n) => write!(f, "Switch to workspace {n}"),
            Action::MinimizeFocused => write!(f, "Minimize focused window"),
            Action::ToggleMaximizeFocused => write!(f, "Maximize / restore focused window"),
            Action::CloseFocused => write!(f, "Close focused window"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Shift is ignored for printable keys since terminals disagree on
    /// whether `?` arrives with it.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let mods = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        key.code == self.code && mods == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::plain(KeyCode::Char('q')));
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        kb.add(ToggleHelp, KeyCombo::plain(KeyCode::Char('?')));
        kb.add(ToggleHelp, KeyCombo::plain(KeyCode::Esc));
        for idx in 0..SIDEBAR_APPS.len() {
            kb.add(OpenApp(idx), KeyCombo::plain(KeyCode::F(idx as u8 + 1)));
        }
        for n in 1..=WORKSPACE_KEYS {
            if let Some(digit) = char::from_digit(n, 10) {
                kb.add(SwitchWorkspace(n), KeyCombo::plain(KeyCode::Char(digit)));
            }
        }
        kb.add(MinimizeFocused, KeyCombo::plain(KeyCode::Char('m')));
        kb.add(ToggleMaximizeFocused, KeyCombo::plain(KeyCode::Char('x')));
        kb.add(CloseFocused, KeyCombo::plain(KeyCode::Char('c')));
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.map
            .iter()
            .find(|(_, list)| list.iter().any(|c| c.matches(key)))
            .map(|(act, _)| *act)
    }

    /// Bindings in a stable order for the help overlay.
    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        let mut v: Vec<_> = self
            .map
            .iter()
            .map(|(act, list)| (*act, list.iter().map(|c| c.display()).collect()))
            .collect();
        v.sort_by_key(|(act, _)| *act);
        v
    }
}
