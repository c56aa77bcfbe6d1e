use serde::{Deserialize, Serialize};

use super::state::{DeviceType, EditorMode, InteractionMode};

/// Actions accepted by the editor store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    SetInserterOpened(bool),
    SetListViewOpened(bool),
    SetDeviceType(DeviceType),
    SetEditorMode(EditorMode),
}

/// Actions accepted by the block-editor store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEditorAction {
    SetInteractionMode(InteractionMode),
}

/// The boolean preferences the toolbar reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceKey {
    ShowIconLabels,
    DistractionFree,
    FixedToolbar,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 3] = [
        PreferenceKey::ShowIconLabels,
        PreferenceKey::DistractionFree,
        PreferenceKey::FixedToolbar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreferenceKey::ShowIconLabels => "Show button text labels",
            PreferenceKey::DistractionFree => "Distraction free",
            PreferenceKey::FixedToolbar => "Top toolbar",
        }
    }
}

/// Actions accepted by the preferences store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesAction {
    Set { key: PreferenceKey, value: bool },
    Toggle(PreferenceKey),
}
