//! Open/close handling for the Inserter and List View side panels.
//!
//! A toggle is planned as a list of [`ToggleStep`]s and then executed in
//! order. Closing the Inserter from its own toggle returns focus to that
//! toggle *before* dispatching the close; if the close goes out first, the
//! panel's dismissal handler never sees the focus change and the panel stays
//! open on the first click.

use std::collections::HashMap;

use crate::store::{EditorAction, EditorState, StateStore, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Inserter,
    ListView,
}

impl Panel {
    pub fn is_open(self, state: &EditorState) -> bool {
        match self {
            Panel::Inserter => state.inserter_opened,
            Panel::ListView => state.list_view_opened,
        }
    }

    pub fn set_opened(self, open: bool) -> EditorAction {
        match self {
            Panel::Inserter => EditorAction::SetInserterOpened(open),
            Panel::ListView => EditorAction::SetListViewOpened(open),
        }
    }
}

/// The control that last triggered a panel's toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusAnchor(egui::Id);

impl FocusAnchor {
    pub fn id(self) -> egui::Id {
        self.0
    }
}

impl From<egui::Id> for FocusAnchor {
    fn from(id: egui::Id) -> Self {
        Self(id)
    }
}

/// Something that can move keyboard focus to an anchor.
pub trait FocusSink {
    fn focus(&self, anchor: FocusAnchor);
}

impl FocusSink for egui::Context {
    fn focus(&self, anchor: FocusAnchor) {
        self.memory_mut(|memory| memory.request_focus(anchor.id()));
    }
}

/// One step of a planned toggle, executed strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStep {
    TransferFocus(FocusAnchor),
    Dispatch(EditorAction),
}

#[derive(Debug, Default)]
pub struct PanelToggleController {
    anchors: HashMap<Panel, FocusAnchor>,
}

impl PanelToggleController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers the control that triggered `panel`'s toggle.
    pub fn record_trigger(&mut self, panel: Panel, anchor: FocusAnchor) {
        self.anchors.insert(panel, anchor);
    }

    pub fn anchor(&self, panel: Panel) -> Option<FocusAnchor> {
        self.anchors.get(&panel).copied()
    }

    /// Plans a toggle of `panel` given whether it is currently open.
    ///
    /// Returns no steps when `disabled`.
    pub fn plan_toggle(&self, panel: Panel, is_open: bool, disabled: bool) -> Vec<ToggleStep> {
        if disabled {
            return Vec::new();
        }
        let mut steps = Vec::with_capacity(2);
        if panel == Panel::Inserter && is_open {
            match self.anchor(panel) {
                Some(anchor) => steps.push(ToggleStep::TransferFocus(anchor)),
                None => log::warn!("closing {panel:?} without a recorded focus anchor"),
            }
        }
        steps.push(ToggleStep::Dispatch(panel.set_opened(!is_open)));
        steps
    }

    /// Flips `panel` in the editor store. Inert when `disabled`.
    pub fn toggle(
        &self,
        panel: Panel,
        disabled: bool,
        focus: &dyn FocusSink,
        store: &StateStore<EditorState>,
    ) {
        if disabled {
            log::debug!("ignoring {panel:?} toggle: block tools are disabled");
            return;
        }
        let is_open = store.get().map(|state| panel.is_open(&state)).unwrap_or(false);
        let steps = self.plan_toggle(panel, is_open, disabled);
        run_steps(&steps, focus, store);
    }

    /// Closes `panel` from outside its toggle control. No focus step.
    pub fn dismiss(&self, panel: Panel, store: &StateStore<EditorState>) {
        log::debug!("dismissing {panel:?}");
        store.dispatch(panel.set_opened(false));
    }
}

pub fn run_steps(steps: &[ToggleStep], focus: &dyn FocusSink, store: &StateStore<EditorState>) {
    for step in steps {
        match *step {
            ToggleStep::TransferFocus(anchor) => focus.focus(anchor),
            ToggleStep::Dispatch(action) => store.dispatch(action),
        }
    }
}
