//! Decides which toolbar controls are visible, in what order and in what state.
//!
//! Everything here is a pure function of [`ToolbarInputs`]. Each visibility
//! rule is its own predicate; the rules overlap but none is derived from
//! another.

use crate::history::HistoryAvailability;
use crate::shortcuts::{self, ShortcutRegistry};
use crate::snapshot::ToolbarSnapshot;
use crate::store::{EditorMode, InteractionMode};
use crate::viewport::ViewportClass;

use super::{
    INSERTER_ADD_LABEL, INSERTER_CLOSE_LABEL, INSERTER_LONG_LABEL, LIST_VIEW_LABEL, REDO_LABEL,
    TOOL_SELECTOR_LABEL, TOOLBAR_ARIA_LABEL, UNDO_LABEL, ZOOM_OUT_LABEL,
};

/// Everything the composer looks at.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarInputs<'a> {
    pub viewport: ViewportClass,
    pub snapshot: &'a ToolbarSnapshot,
    pub history: HistoryAvailability,
    pub shortcuts: &'a ShortcutRegistry,
    pub disable_block_tools: bool,
    pub zoom_out_experiment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    InserterToggle,
    ToolSelector,
    Undo,
    Redo,
    ListViewToggle,
    ZoomOutToggle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Icon button.
    #[default]
    Icon,
    /// Text button, used when icon labels are shown.
    Tertiary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarControl {
    pub kind: ControlKind,
    /// Accessible label; also the visible text for tertiary buttons.
    pub label: &'static str,
    pub icon: &'static str,
    pub variant: ButtonVariant,
    pub disabled: bool,
    pub pressed: bool,
    /// `Some` for controls that open and close a panel.
    pub aria_expanded: Option<bool>,
    pub show_tooltip: bool,
    pub shortcut: Option<String>,
    /// Current tool, only set on the tool selector.
    pub active_tool: Option<InteractionMode>,
}

impl ToolbarControl {
    fn new(kind: ControlKind, label: &'static str, icon: &'static str, icon_labels: bool) -> Self {
        Self {
            kind,
            label,
            icon,
            variant: if icon_labels {
                ButtonVariant::Tertiary
            } else {
                ButtonVariant::Icon
            },
            disabled: false,
            pressed: false,
            aria_expanded: None,
            show_tooltip: !icon_labels,
            shortcut: None,
            active_tool: None,
        }
    }
}

/// The composed toolbar, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarLayout {
    pub aria_label: &'static str,
    pub controls: Vec<ToolbarControl>,
}

impl ToolbarLayout {
    pub fn kinds(&self) -> Vec<ControlKind> {
        self.controls.iter().map(|control| control.kind).collect()
    }

    pub fn contains(&self, kind: ControlKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn get(&self, kind: ControlKind) -> Option<&ToolbarControl> {
        self.controls.iter().find(|control| control.kind == kind)
    }
}

pub fn shows_inserter(inputs: &ToolbarInputs<'_>) -> bool {
    !inputs.snapshot.preferences.is_distraction_free
}

/// Tool selector, undo, redo and list view live in this group. Narrow
/// viewports with icon labels drop the whole group.
pub fn shows_secondary_group(inputs: &ToolbarInputs<'_>) -> bool {
    inputs.viewport.is_wide || !inputs.snapshot.preferences.show_icon_labels
}

pub fn shows_tool_selector(inputs: &ToolbarInputs<'_>) -> bool {
    inputs.viewport.is_large && !inputs.snapshot.preferences.has_fixed_toolbar
}

pub fn shows_list_view_toggle(inputs: &ToolbarInputs<'_>) -> bool {
    !inputs.snapshot.preferences.is_distraction_free
}

/// All five gates must hold.
pub fn shows_zoom_out_toggle(inputs: &ToolbarInputs<'_>) -> bool {
    let prefs = &inputs.snapshot.preferences;
    inputs.zoom_out_experiment
        && inputs.snapshot.editor_mode == EditorMode::Visual
        && inputs.viewport.is_large
        && !prefs.is_distraction_free
        && !prefs.has_fixed_toolbar
}

pub fn compose(inputs: &ToolbarInputs<'_>) -> ToolbarLayout {
    let snapshot = inputs.snapshot;
    let icon_labels = snapshot.preferences.show_icon_labels;
    let mut controls = Vec::with_capacity(6);

    if shows_inserter(inputs) {
        let label = match (icon_labels, snapshot.is_inserter_opened) {
            (false, _) => INSERTER_LONG_LABEL,
            (true, false) => INSERTER_ADD_LABEL,
            (true, true) => INSERTER_CLOSE_LABEL,
        };
        let mut control = ToolbarControl::new(ControlKind::InserterToggle, label, "➕", icon_labels);
        control.disabled = inputs.disable_block_tools;
        control.pressed = snapshot.is_inserter_opened;
        control.aria_expanded = Some(snapshot.is_inserter_opened);
        controls.push(control);
    }

    if shows_secondary_group(inputs) {
        if shows_tool_selector(inputs) {
            let mut control =
                ToolbarControl::new(ControlKind::ToolSelector, TOOL_SELECTOR_LABEL, "✏", icon_labels);
            control.disabled = inputs.disable_block_tools;
            control.active_tool = Some(snapshot.interaction_mode);
            controls.push(control);
        }

        let mut undo = ToolbarControl::new(ControlKind::Undo, UNDO_LABEL, "⟲", icon_labels);
        undo.disabled = !inputs.history.can_undo;
        undo.shortcut = Some(inputs.shortcuts.display(shortcuts::UNDO));
        controls.push(undo);

        let mut redo = ToolbarControl::new(ControlKind::Redo, REDO_LABEL, "⟳", icon_labels);
        redo.disabled = !inputs.history.can_redo;
        redo.shortcut = Some(inputs.shortcuts.display(shortcuts::REDO));
        controls.push(redo);

        if shows_list_view_toggle(inputs) {
            let mut control =
                ToolbarControl::new(ControlKind::ListViewToggle, LIST_VIEW_LABEL, "☰", icon_labels);
            control.disabled = inputs.disable_block_tools;
            control.pressed = snapshot.is_list_view_opened;
            control.aria_expanded = Some(snapshot.is_list_view_opened);
            control.shortcut = Some(snapshot.list_view_shortcut.clone());
            controls.push(control);
        }
    }

    if shows_zoom_out_toggle(inputs) {
        let mut control =
            ToolbarControl::new(ControlKind::ZoomOutToggle, ZOOM_OUT_LABEL, "⇕", icon_labels);
        control.pressed = snapshot.is_zoomed_out();
        controls.push(control);
    }

    ToolbarLayout {
        aria_label: TOOLBAR_ARIA_LABEL,
        controls,
    }
}
