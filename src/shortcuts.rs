//! Named keyboard shortcuts and their display strings.

use std::collections::HashMap;

use egui::{Key, KeyboardShortcut, ModifierNames, Modifiers};
use serde::{Deserialize, Serialize};

pub const TOGGLE_LIST_VIEW: &str = "core/editor/toggle-list-view";
pub const UNDO: &str = "core/editor/undo";
pub const REDO: &str = "core/editor/redo";

/// Decides whether shortcuts are shown with mac symbols or key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Other,
}

impl Default for Platform {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    platform: Platform,
    shortcuts: HashMap<&'static str, KeyboardShortcut>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl ShortcutRegistry {
    /// Creates a registry holding the editor's built-in shortcuts.
    pub fn new(platform: Platform) -> Self {
        let mut registry = Self {
            platform,
            shortcuts: HashMap::new(),
        };
        registry.register(
            TOGGLE_LIST_VIEW,
            KeyboardShortcut::new(Modifiers::CTRL | Modifiers::ALT, Key::O),
        );
        registry.register(UNDO, KeyboardShortcut::new(Modifiers::COMMAND, Key::Z));
        registry.register(
            REDO,
            KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z),
        );
        registry
    }

    /// Registers or replaces the shortcut for `name`.
    pub fn register(&mut self, name: &'static str, shortcut: KeyboardShortcut) {
        self.shortcuts.insert(name, shortcut);
    }

    pub fn get(&self, name: &str) -> Option<KeyboardShortcut> {
        self.shortcuts.get(name).copied()
    }

    /// Formatted shortcut for display, or an empty string for unknown names.
    pub fn display(&self, name: &str) -> String {
        let Some(shortcut) = self.get(name) else {
            return String::new();
        };
        match self.platform {
            Platform::Mac => shortcut.format(&ModifierNames::SYMBOLS, true),
            Platform::Other => shortcut.format(&ModifierNames::NAMES, false),
        }
    }
}
