//! Draws a composed [`ToolbarLayout`] with egui and reports what was clicked.

use egui::{Color32, FontId, Sense, Stroke, WidgetInfo, WidgetType};

use crate::panels::{Panel, PanelToggleController};

use super::{ButtonVariant, ControlKind, TOOL_CHOICES, ToolbarCommand, ToolbarControl, ToolbarLayout};

/// Draws the toolbar as one horizontal row in layout order.
///
/// Clicking a panel toggle records it as that panel's focus anchor.
pub fn show(
    ui: &mut egui::Ui,
    layout: &ToolbarLayout,
    panels: &mut PanelToggleController,
) -> Option<ToolbarCommand> {
    let mut command = None;
    let row = ui.horizontal(|ui| {
        for control in &layout.controls {
            if let Some(clicked) = show_control(ui, control, panels) {
                command = Some(clicked);
            }
        }
    });
    row.response
        .widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, layout.aria_label));
    command
}

fn show_control(
    ui: &mut egui::Ui,
    control: &ToolbarControl,
    panels: &mut PanelToggleController,
) -> Option<ToolbarCommand> {
    if control.kind == ControlKind::ToolSelector {
        return tool_selector(ui, control);
    }

    let response = ui
        .add_enabled_ui(!control.disabled, |ui| ToolbarButton::new(control).show(ui))
        .inner;
    if !response.clicked() {
        return None;
    }

    let command = match control.kind {
        ControlKind::InserterToggle => {
            panels.record_trigger(Panel::Inserter, response.id.into());
            ToolbarCommand::ToggleInserter
        }
        ControlKind::ListViewToggle => {
            panels.record_trigger(Panel::ListView, response.id.into());
            ToolbarCommand::ToggleListView
        }
        ControlKind::Undo => ToolbarCommand::Undo,
        ControlKind::Redo => ToolbarCommand::Redo,
        ControlKind::ZoomOutToggle => ToolbarCommand::ToggleZoomOut,
        ControlKind::ToolSelector => return None,
    };
    Some(command)
}

fn tool_selector(ui: &mut egui::Ui, control: &ToolbarControl) -> Option<ToolbarCommand> {
    let title = visible_text(control);
    let menu = ui
        .add_enabled_ui(!control.disabled, |ui| {
            ui.menu_button(title, |ui| {
                let mut picked = None;
                for (tool, name) in TOOL_CHOICES {
                    if ui.selectable_label(control.active_tool == Some(tool), name).clicked() {
                        picked = Some(tool);
                        ui.close_menu();
                    }
                }
                picked
            })
        })
        .inner;
    if control.show_tooltip {
        menu.response.on_hover_text(tooltip(control));
    }
    menu.inner.flatten().map(ToolbarCommand::SelectTool)
}

fn visible_text(control: &ToolbarControl) -> &'static str {
    match control.variant {
        ButtonVariant::Tertiary => control.label,
        ButtonVariant::Icon => control.icon,
    }
}

fn tooltip(control: &ToolbarControl) -> String {
    match control.shortcut.as_deref() {
        Some(shortcut) if !shortcut.is_empty() => format!("{} ({shortcut})", control.label),
        _ => control.label.to_owned(),
    }
}

/// A flat toolbar button that shows either an icon or its text label.
pub struct ToolbarButton<'a> {
    control: &'a ToolbarControl,
}

impl<'a> ToolbarButton<'a> {
    pub fn new(control: &'a ToolbarControl) -> Self {
        Self { control }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let control = self.control;
        let font_id = match control.variant {
            ButtonVariant::Icon => FontId::proportional(20.0),
            ButtonVariant::Tertiary => FontId::proportional(14.0),
        };
        let text_color = if !ui.is_enabled() {
            Color32::from_gray(110)
        } else if control.pressed {
            Color32::BLACK
        } else {
            Color32::WHITE
        };
        let galley = ui
            .painter()
            .layout_no_wrap(visible_text(control).to_owned(), font_id, text_color);

        let padding = egui::vec2(8.0, 6.0);
        let size = (galley.size() + padding * 2.0).max(egui::vec2(32.0, 32.0));
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if control.pressed {
                Color32::from_rgb(100, 181, 246)
            } else if response.hovered() {
                Color32::from_gray(40)
            } else {
                Color32::from_gray(30)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(text_pos, galley, text_color);

            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    Stroke::new(2.0, Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        let enabled = ui.is_enabled();
        response.widget_info(|| {
            WidgetInfo::selected(WidgetType::Button, enabled, control.pressed, control.label)
        });
        if control.show_tooltip {
            response = response.on_hover_text(tooltip(control));
        }
        response
    }
}
