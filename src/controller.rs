//! Runs [`ToolbarCommand`]s against the stores and the edit history.

use crate::config::ToolbarConfig;
use crate::history::EditHistory;
use crate::mode;
use crate::panels::{FocusSink, Panel, PanelToggleController};
use crate::shortcuts::{self, ShortcutRegistry};
use crate::snapshot::StoreSet;
use crate::toolbar::ToolbarCommand;

#[derive(Debug, Default)]
pub struct ToolbarController {
    config: ToolbarConfig,
    panels: PanelToggleController,
}

impl ToolbarController {
    pub fn new(config: ToolbarConfig) -> Self {
        Self {
            config,
            panels: PanelToggleController::new(),
        }
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn panels(&self) -> &PanelToggleController {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelToggleController {
        &mut self.panels
    }

    /// Runs one user action. Panel toggles and tool selection are inert while
    /// block tools are disabled.
    pub fn execute(
        &self,
        command: ToolbarCommand,
        stores: &StoreSet,
        focus: &dyn FocusSink,
        history: &mut dyn EditHistory,
    ) {
        log::debug!("toolbar command: {command:?}");
        let disabled = self.config.disable_block_tools;
        match command {
            ToolbarCommand::ToggleInserter => {
                self.panels.toggle(Panel::Inserter, disabled, focus, &stores.editor);
            }
            ToolbarCommand::ToggleListView => {
                self.panels.toggle(Panel::ListView, disabled, focus, &stores.editor);
            }
            ToolbarCommand::SelectTool(tool) => {
                mode::select_tool(&stores.block_editor, tool, disabled);
            }
            ToolbarCommand::Undo => {
                if let Err(err) = history.undo() {
                    log::warn!("undo failed: {err}");
                }
            }
            ToolbarCommand::Redo => {
                if let Err(err) = history.redo() {
                    log::warn!("redo failed: {err}");
                }
            }
            ToolbarCommand::ToggleZoomOut => {
                mode::toggle_zoom_out(&stores.editor, &stores.block_editor);
            }
        }
    }

    /// Translates pressed keyboard shortcuts into commands, consuming them.
    pub fn consume_shortcuts(
        &self,
        ctx: &egui::Context,
        registry: &ShortcutRegistry,
    ) -> Vec<ToolbarCommand> {
        // Redo before undo: the redo chord contains the undo chord.
        let bindings = [
            (shortcuts::TOGGLE_LIST_VIEW, ToolbarCommand::ToggleListView),
            (shortcuts::REDO, ToolbarCommand::Redo),
            (shortcuts::UNDO, ToolbarCommand::Undo),
        ];
        let mut commands = Vec::new();
        for (name, command) in bindings {
            let Some(shortcut) = registry.get(name) else {
                continue;
            };
            if ctx.input_mut(|input| input.consume_shortcut(&shortcut)) {
                commands.push(command);
            }
        }
        commands
    }
}
