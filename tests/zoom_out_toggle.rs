use header_toolbar::mode;
use header_toolbar::store::{
    BlockEditorState, DeviceType, EditorAction, EditorState, InteractionMode, StateStore, Store,
};

fn stores() -> (StateStore<EditorState>, StateStore<BlockEditorState>) {
    (StateStore::default(), StateStore::default())
}

#[test]
fn test_zoom_out_round_trip_keeps_desktop() {
    let (editor, block_editor) = stores();
    editor.dispatch(EditorAction::SetDeviceType(DeviceType::Mobile));

    mode::toggle_zoom_out(&editor, &block_editor);
    assert_eq!(block_editor.get().unwrap().interaction_mode, InteractionMode::ZoomOut);
    assert_eq!(editor.get().unwrap().device_type, DeviceType::Desktop);

    editor.dispatch(EditorAction::SetDeviceType(DeviceType::Tablet));
    mode::toggle_zoom_out(&editor, &block_editor);
    assert_eq!(block_editor.get().unwrap().interaction_mode, InteractionMode::Edit);
    assert_eq!(editor.get().unwrap().device_type, DeviceType::Desktop);
}

#[test]
fn test_leaving_zoom_out_does_not_restore_device() {
    let (editor, block_editor) = stores();
    editor.dispatch(EditorAction::SetDeviceType(DeviceType::Tablet));

    mode::toggle_zoom_out(&editor, &block_editor);
    mode::toggle_zoom_out(&editor, &block_editor);

    assert_eq!(editor.get().unwrap().device_type, DeviceType::Desktop);
    assert_eq!(DeviceType::Desktop.to_string(), "Desktop");
}

#[test]
fn test_zoom_out_from_navigation() {
    let (editor, block_editor) = stores();
    mode::select_tool(&block_editor, InteractionMode::Navigation, false);

    mode::toggle_zoom_out(&editor, &block_editor);
    assert_eq!(block_editor.get().unwrap().interaction_mode, InteractionMode::ZoomOut);
}

#[test]
fn test_zoom_out_on_uninitialized_block_editor_is_dropped() {
    let editor = StateStore::<EditorState>::default();
    let block_editor = StateStore::<BlockEditorState>::uninitialized();

    mode::toggle_zoom_out(&editor, &block_editor);

    assert!(block_editor.get().is_err());
    assert_eq!(editor.get().unwrap().device_type, DeviceType::Desktop);
}

#[test]
fn test_select_tool_is_inert_when_disabled() {
    let (_, block_editor) = stores();
    mode::select_tool(&block_editor, InteractionMode::Navigation, true);
    assert_eq!(block_editor.get().unwrap().interaction_mode, InteractionMode::Edit);
}
