//! Switching between normal editing, navigation and the zoomed-out overview.

use crate::store::{
    BlockEditorAction, BlockEditorState, DeviceType, EditorAction, EditorState, InteractionMode,
    StateStore, Store,
};

/// Device type and interaction mode that follow a zoom-out toggle from `current`.
///
/// The device type is always reset to desktop; zoom-out lays the canvas out
/// at desktop width, so neither entering nor leaving it may keep an override.
pub fn zoom_out_transition(current: InteractionMode) -> (DeviceType, InteractionMode) {
    let next = if current == InteractionMode::ZoomOut {
        InteractionMode::Edit
    } else {
        InteractionMode::ZoomOut
    };
    (DeviceType::Desktop, next)
}

/// Toggles zoom-out, resetting the device type first.
pub fn toggle_zoom_out(editor: &StateStore<EditorState>, block_editor: &StateStore<BlockEditorState>) {
    let current = block_editor
        .get()
        .map(|state| state.interaction_mode)
        .unwrap_or_default();
    let (device, mode) = zoom_out_transition(current);
    log::info!("zoom-out toggle: {} -> {}", current.as_str(), mode.as_str());
    editor.dispatch(EditorAction::SetDeviceType(device));
    block_editor.dispatch(BlockEditorAction::SetInteractionMode(mode));
}

/// Selects a tool from the tool selector. Inert when `disabled`.
pub fn select_tool(block_editor: &StateStore<BlockEditorState>, mode: InteractionMode, disabled: bool) {
    if disabled {
        log::debug!("ignoring tool selection: block tools are disabled");
        return;
    }
    log::info!("tool selected: {}", mode.as_str());
    block_editor.dispatch(BlockEditorAction::SetInteractionMode(mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_always_targets_desktop() {
        for mode in [InteractionMode::Edit, InteractionMode::Navigation, InteractionMode::ZoomOut] {
            assert_eq!(zoom_out_transition(mode).0, DeviceType::Desktop);
        }
    }

    #[test]
    fn test_navigation_enters_zoom_out() {
        assert_eq!(zoom_out_transition(InteractionMode::Navigation).1, InteractionMode::ZoomOut);
        assert_eq!(zoom_out_transition(InteractionMode::ZoomOut).1, InteractionMode::Edit);
    }
}
