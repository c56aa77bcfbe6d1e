//! The document tools toolbar: what to show ([`compose`]) and how to draw it ([`ui`]).

pub mod compose;
pub mod ui;

pub use compose::{
    ButtonVariant, ControlKind, ToolbarControl, ToolbarInputs, ToolbarLayout, compose,
    shows_inserter, shows_list_view_toggle, shows_secondary_group, shows_tool_selector,
    shows_zoom_out_toggle,
};

use crate::store::InteractionMode;

/// Accessible name of the toolbar itself.
pub const TOOLBAR_ARIA_LABEL: &str = "Document tools";

pub const INSERTER_LONG_LABEL: &str = "Toggle block inserter";
pub const INSERTER_ADD_LABEL: &str = "Add";
pub const INSERTER_CLOSE_LABEL: &str = "Close";
pub const TOOL_SELECTOR_LABEL: &str = "Tools";
pub const UNDO_LABEL: &str = "Undo";
pub const REDO_LABEL: &str = "Redo";
pub const LIST_VIEW_LABEL: &str = "Document Overview";
pub const ZOOM_OUT_LABEL: &str = "Zoom-out View";

/// A user action on the toolbar, produced by the UI and run by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    ToggleInserter,
    ToggleListView,
    SelectTool(InteractionMode),
    Undo,
    Redo,
    ToggleZoomOut,
}

/// Tools offered by the tool selector, with their display names.
pub const TOOL_CHOICES: [(InteractionMode, &str); 2] = [
    (InteractionMode::Edit, "Write"),
    (InteractionMode::Navigation, "Design"),
];
