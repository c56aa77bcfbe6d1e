use serde::{Deserialize, Serialize};

use super::Reduce;
use super::actions::{BlockEditorAction, EditorAction, PreferenceKey, PreferencesAction};

/// Whether the document is edited visually or as source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Visual,
    Code,
}

/// How the canvas responds to pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// Normal editing.
    #[default]
    Edit,
    /// Selecting and moving whole blocks.
    Navigation,
    /// Scaled-down overview of the whole document.
    ZoomOut,
}

impl InteractionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionMode::Edit => "edit",
            InteractionMode::Navigation => "navigation",
            InteractionMode::ZoomOut => "zoom-out",
        }
    }
}

/// Device preview the canvas is laid out for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Desktop => "Desktop",
            DeviceType::Tablet => "Tablet",
            DeviceType::Mobile => "Mobile",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Panel visibility, device preview and editor mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    pub inserter_opened: bool,
    pub list_view_opened: bool,
    pub device_type: DeviceType,
    pub editor_mode: EditorMode,
}

impl Reduce for EditorState {
    type Action = EditorAction;
    const NAME: &'static str = "core/editor";

    fn reduce(&mut self, action: EditorAction) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }

        match action {
            EditorAction::SetInserterOpened(open) => set(&mut self.inserter_opened, open),
            EditorAction::SetListViewOpened(open) => set(&mut self.list_view_opened, open),
            EditorAction::SetDeviceType(device) => set(&mut self.device_type, device),
            EditorAction::SetEditorMode(mode) => set(&mut self.editor_mode, mode),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEditorState {
    pub interaction_mode: InteractionMode,
}

impl Reduce for BlockEditorState {
    type Action = BlockEditorAction;
    const NAME: &'static str = "core/block-editor";

    fn reduce(&mut self, action: BlockEditorAction) -> bool {
        match action {
            BlockEditorAction::SetInteractionMode(mode) => {
                let changed = self.interaction_mode != mode;
                self.interaction_mode = mode;
                changed
            }
        }
    }
}

/// User preference flags that change what the toolbar shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceFlags {
    pub show_icon_labels: bool,
    pub is_distraction_free: bool,
    pub has_fixed_toolbar: bool,
}

impl PreferenceFlags {
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::ShowIconLabels => self.show_icon_labels,
            PreferenceKey::DistractionFree => self.is_distraction_free,
            PreferenceKey::FixedToolbar => self.has_fixed_toolbar,
        }
    }

    fn slot(&mut self, key: PreferenceKey) -> &mut bool {
        match key {
            PreferenceKey::ShowIconLabels => &mut self.show_icon_labels,
            PreferenceKey::DistractionFree => &mut self.is_distraction_free,
            PreferenceKey::FixedToolbar => &mut self.has_fixed_toolbar,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesState {
    pub flags: PreferenceFlags,
}

impl Reduce for PreferencesState {
    type Action = PreferencesAction;
    const NAME: &'static str = "core/preferences";

    fn reduce(&mut self, action: PreferencesAction) -> bool {
        let (key, value) = match action {
            PreferencesAction::Set { key, value } => (key, value),
            PreferencesAction::Toggle(key) => (key, !self.flags.get(key)),
        };
        let slot = self.flags.slot(key);
        let changed = *slot != value;
        *slot = value;
        changed
    }
}
