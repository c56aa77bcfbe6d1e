use crate::command::Command;
use crate::config::ToolbarConfig;
use crate::controller::ToolbarController;
use crate::document::{Block, BlockKind, Document};
use crate::history::{EditHistory, EditSession};
use crate::panels::Panel;
use crate::shortcuts::ShortcutRegistry;
use crate::snapshot::{SnapshotAggregator, StoreSet, ToolbarSnapshot};
use crate::store::{
    DeviceType, EditorAction, EditorMode, PreferenceKey, PreferencesAction, Store,
};
use crate::toolbar::{self, ToolbarInputs};
use crate::viewport::Viewport;

/// Demo editing surface built around the header toolbar.
pub struct ToolbarApp {
    stores: StoreSet,
    aggregator: SnapshotAggregator,
    controller: ToolbarController,
    session: EditSession,
}

impl ToolbarApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: ToolbarConfig) -> Self {
        let ctx = cc.egui_ctx.clone();
        Self::with_repaint_hook(config, move || ctx.request_repaint())
    }

    /// Builds the app without a window; `repaint` runs after every store change.
    pub fn with_repaint_hook(config: ToolbarConfig, repaint: impl Fn() + Send + Sync + 'static) -> Self {
        let stores = StoreSet {
            shortcuts: ShortcutRegistry::new(config.platform).into(),
            ..StoreSet::default()
        };
        let aggregator = SnapshotAggregator::with_change_hook(stores.clone(), move |_| repaint());
        Self {
            stores,
            aggregator,
            controller: ToolbarController::new(config),
            session: EditSession::new(starter_document()),
        }
    }

    pub fn stores(&self) -> &StoreSet {
        &self.stores
    }

    pub fn controller(&self) -> &ToolbarController {
        &self.controller
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn snapshot(&self) -> ToolbarSnapshot {
        self.aggregator.snapshot()
    }

    /// Runs one frame of UI. Separate from `eframe::App::update` so it can be
    /// driven by a headless `egui::Context`.
    pub fn ui(&mut self, ctx: &egui::Context) {
        // Sampled before the menus run, since they close themselves on Escape.
        let popup_open = ctx.memory(|memory| memory.any_popup_open());
        let mut commands = self
            .controller
            .consume_shortcuts(ctx, &self.stores.shortcuts);

        let config = self.controller.config().clone();
        let viewport = Viewport::from_egui(ctx, config.breakpoints).classify();
        let snapshot = self.aggregator.snapshot();
        let inputs = ToolbarInputs {
            viewport,
            snapshot: &snapshot,
            history: self.session.availability(),
            shortcuts: &self.stores.shortcuts,
            disable_block_tools: config.disable_block_tools,
            zoom_out_experiment: config.zoom_out_experiment,
        };
        let layout = toolbar::compose(&inputs);

        egui::TopBottomPanel::top("header_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(command) = toolbar::ui::show(ui, &layout, self.controller.panels_mut()) {
                    commands.push(command);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    options_menu(ui, &self.stores, &snapshot);
                });
            });
        });

        if snapshot.is_inserter_opened {
            self.inserter_panel(ctx, popup_open);
        }
        if snapshot.is_list_view_opened {
            self.list_view_panel(ctx);
        }
        self.canvas(ctx, &snapshot);

        for command in commands {
            self.controller
                .execute(command, &self.stores, ctx, &mut self.session);
        }
    }

    /// Escape closes the panel unless it was aimed at an open popup.
    fn inserter_panel(&mut self, ctx: &egui::Context, popup_open: bool) {
        let escape = ctx.input(|input| input.key_pressed(egui::Key::Escape));
        let mut close = escape && !popup_open;
        let mut insert = None;

        egui::SidePanel::left("inserter_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Blocks");
                    if ui.small_button("✕").on_hover_text("Close block inserter").clicked() {
                        close = true;
                    }
                });
                ui.separator();
                for kind in BlockKind::ALL {
                    if ui.button(kind.name()).clicked() {
                        log::info!("block selected from inserter: {}", kind.name());
                        insert = Some(kind);
                    }
                }
            });

        if let Some(kind) = insert {
            let command = Command::InsertBlock {
                index: self.session.document().len(),
                block: Block::new(kind),
            };
            if let Err(err) = self.session.execute(command) {
                log::warn!("insert failed: {err}");
            }
        }
        if close {
            self.controller
                .panels()
                .dismiss(Panel::Inserter, &self.stores.editor);
        }
    }

    fn list_view_panel(&mut self, ctx: &egui::Context) {
        let mut remove = None;
        let mut close = false;

        egui::SidePanel::right("list_view_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Document Overview");
                    if ui.small_button("✕").on_hover_text("Close").clicked() {
                        close = true;
                    }
                });
                ui.separator();
                if self.session.document().is_empty() {
                    ui.weak("No blocks yet.");
                }
                for (index, block) in self.session.document().blocks().iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}. {}", index + 1, block.kind.name()));
                        if ui.small_button("🗑").on_hover_text("Remove block").clicked() {
                            remove = Some(index);
                        }
                    });
                }
            });

        if let Some(index) = remove {
            if let Err(err) = self.session.execute(Command::RemoveBlock { index, removed: None }) {
                log::warn!("remove failed: {err}");
            }
        }
        if close {
            self.controller
                .panels()
                .dismiss(Panel::ListView, &self.stores.editor);
        }
    }

    fn canvas(&self, ctx: &egui::Context, snapshot: &ToolbarSnapshot) {
        let text_size = if snapshot.is_zoomed_out() { 9.0 } else { 15.0 };
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.weak(format!(
                "{} · {} · {}",
                snapshot.interaction_mode.as_str(),
                snapshot.device_type,
                match snapshot.editor_mode {
                    EditorMode::Visual => "visual",
                    EditorMode::Code => "code",
                }
            ));
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for block in self.session.document().blocks() {
                    let text = if block.content.is_empty() {
                        format!("[{}]", block.kind.name())
                    } else {
                        block.content.clone()
                    };
                    let text = egui::RichText::new(text).size(text_size);
                    match block.kind {
                        BlockKind::Heading => ui.label(text.strong()),
                        BlockKind::Quote => ui.label(text.italics()),
                        _ => ui.label(text),
                    };
                }
            });
        });
    }
}

fn options_menu(ui: &mut egui::Ui, stores: &StoreSet, snapshot: &ToolbarSnapshot) {
    ui.menu_button("Options", |ui| {
        ui.label("Preferences");
        for key in PreferenceKey::ALL {
            let mut value = snapshot.preferences.get(key);
            if ui.checkbox(&mut value, key.label()).changed() {
                stores
                    .preferences
                    .dispatch(PreferencesAction::Set { key, value });
            }
        }
        ui.separator();

        ui.label("Editor");
        for (mode, name) in [(EditorMode::Visual, "Visual editor"), (EditorMode::Code, "Code editor")] {
            if ui.radio(snapshot.editor_mode == mode, name).clicked() {
                stores.editor.dispatch(EditorAction::SetEditorMode(mode));
            }
        }
        ui.separator();

        ui.label("Preview");
        for device in [DeviceType::Desktop, DeviceType::Tablet, DeviceType::Mobile] {
            if ui.radio(snapshot.device_type == device, device.as_str()).clicked() {
                stores.editor.dispatch(EditorAction::SetDeviceType(device));
            }
        }
    });
}

fn starter_document() -> Document {
    let mut document = Document::new();
    let blocks = [
        (BlockKind::Heading, "Welcome"),
        (BlockKind::Paragraph, "Open the inserter to add blocks."),
    ];
    for (kind, content) in blocks {
        document.insert_block(
            document.len(),
            Block {
                kind,
                content: content.to_owned(),
            },
        );
    }
    document
}

impl eframe::App for ToolbarApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
