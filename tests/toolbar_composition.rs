use header_toolbar::HistoryAvailability;
use header_toolbar::shortcuts::{Platform, ShortcutRegistry};
use header_toolbar::snapshot::ToolbarSnapshot;
use header_toolbar::store::{EditorMode, InteractionMode, PreferenceFlags};
use header_toolbar::toolbar::{
    self, ButtonVariant, ControlKind, ToolbarInputs, ToolbarLayout, compose,
};
use header_toolbar::viewport::ViewportClass;

#[derive(Clone, Copy)]
struct Flags {
    distraction_free: bool,
    icon_labels: bool,
    wide: bool,
    large: bool,
    fixed_toolbar: bool,
}

impl Flags {
    fn from_bits(bits: u8) -> Self {
        Self {
            distraction_free: bits & 1 != 0,
            icon_labels: bits & 2 != 0,
            wide: bits & 4 != 0,
            large: bits & 8 != 0,
            fixed_toolbar: bits & 16 != 0,
        }
    }

    fn snapshot(self) -> ToolbarSnapshot {
        ToolbarSnapshot {
            preferences: PreferenceFlags {
                show_icon_labels: self.icon_labels,
                is_distraction_free: self.distraction_free,
                has_fixed_toolbar: self.fixed_toolbar,
            },
            list_view_shortcut: "Ctrl+Alt+O".to_owned(),
            ..ToolbarSnapshot::default()
        }
    }

    fn viewport(self) -> ViewportClass {
        ViewportClass {
            is_large: self.large,
            is_wide: self.wide,
        }
    }
}

fn layout_for(
    snapshot: &ToolbarSnapshot,
    viewport: ViewportClass,
    zoom_out_experiment: bool,
    disable_block_tools: bool,
) -> ToolbarLayout {
    let shortcuts = ShortcutRegistry::new(Platform::Other);
    compose(&ToolbarInputs {
        viewport,
        snapshot,
        history: HistoryAvailability::default(),
        shortcuts: &shortcuts,
        disable_block_tools,
        zoom_out_experiment,
    })
}

fn all_flags() -> impl Iterator<Item = Flags> {
    (0u8..32).map(Flags::from_bits)
}

#[test]
fn test_composition_is_deterministic_for_every_flag_combination() {
    for flags in all_flags() {
        let snapshot = flags.snapshot();
        let first = layout_for(&snapshot, flags.viewport(), true, false);
        let second = layout_for(&snapshot, flags.viewport(), true, false);
        assert_eq!(first, second);
    }
}

#[test]
fn test_distraction_free_hides_inserter() {
    for flags in all_flags().filter(|flags| flags.distraction_free) {
        let layout = layout_for(&flags.snapshot(), flags.viewport(), true, false);
        assert!(!layout.contains(ControlKind::InserterToggle));
        assert!(!layout.contains(ControlKind::ListViewToggle));
        assert!(!layout.contains(ControlKind::ZoomOutToggle));
    }
}

#[test]
fn test_narrow_viewport_with_icon_labels_drops_secondary_group() {
    for flags in all_flags().filter(|flags| !flags.wide && flags.icon_labels) {
        let layout = layout_for(&flags.snapshot(), flags.viewport(), false, false);
        for kind in [
            ControlKind::ToolSelector,
            ControlKind::Undo,
            ControlKind::Redo,
            ControlKind::ListViewToggle,
        ] {
            assert!(!layout.contains(kind), "{kind:?} should be hidden");
        }
    }
}

#[test]
fn test_tool_selector_shown_on_large_wide_viewport() {
    let flags = Flags {
        distraction_free: false,
        icon_labels: false,
        wide: true,
        large: true,
        fixed_toolbar: false,
    };
    let layout = layout_for(&flags.snapshot(), flags.viewport(), false, false);
    assert!(layout.contains(ControlKind::ToolSelector));

    let fixed = Flags { fixed_toolbar: true, ..flags };
    let layout = layout_for(&fixed.snapshot(), fixed.viewport(), false, false);
    assert!(!layout.contains(ControlKind::ToolSelector));
    assert!(layout.contains(ControlKind::Undo));
}

#[test]
fn test_zoom_out_requires_experiment_flag() {
    let flags = Flags {
        distraction_free: false,
        icon_labels: false,
        wide: true,
        large: true,
        fixed_toolbar: false,
    };
    let snapshot = flags.snapshot();
    assert!(!layout_for(&snapshot, flags.viewport(), false, false).contains(ControlKind::ZoomOutToggle));
    assert!(layout_for(&snapshot, flags.viewport(), true, false).contains(ControlKind::ZoomOutToggle));
}

#[test]
fn test_zoom_out_gates_are_a_conjunction() {
    let base = Flags {
        distraction_free: false,
        icon_labels: false,
        wide: false,
        large: true,
        fixed_toolbar: false,
    };
    let mut code_mode = base.snapshot();
    code_mode.editor_mode = EditorMode::Code;

    let cases = [
        (base.snapshot(), base.viewport(), true),
        (code_mode, base.viewport(), false),
        (base.snapshot(), Flags { large: false, ..base }.viewport(), false),
        (Flags { distraction_free: true, ..base }.snapshot(), base.viewport(), false),
        (Flags { fixed_toolbar: true, ..base }.snapshot(), base.viewport(), false),
    ];
    for (snapshot, viewport, expected) in cases {
        let layout = layout_for(&snapshot, viewport, true, false);
        assert_eq!(layout.contains(ControlKind::ZoomOutToggle), expected);
    }
}

#[test]
fn test_controls_keep_fixed_order() {
    let flags = Flags {
        distraction_free: false,
        icon_labels: false,
        wide: true,
        large: true,
        fixed_toolbar: false,
    };
    let layout = layout_for(&flags.snapshot(), flags.viewport(), true, false);
    assert_eq!(
        layout.kinds(),
        vec![
            ControlKind::InserterToggle,
            ControlKind::ToolSelector,
            ControlKind::Undo,
            ControlKind::Redo,
            ControlKind::ListViewToggle,
            ControlKind::ZoomOutToggle,
        ]
    );
    assert_eq!(layout.aria_label, toolbar::TOOLBAR_ARIA_LABEL);
}

#[test]
fn test_inserter_label_follows_icon_labels_and_open_state() {
    let viewport = ViewportClass { is_large: true, is_wide: true };
    let mut snapshot = ToolbarSnapshot::default();

    let label = |snapshot: &ToolbarSnapshot| {
        layout_for(snapshot, viewport, false, false)
            .get(ControlKind::InserterToggle)
            .map(|control| control.label)
    };

    assert_eq!(label(&snapshot), Some(toolbar::INSERTER_LONG_LABEL));
    snapshot.is_inserter_opened = true;
    assert_eq!(label(&snapshot), Some(toolbar::INSERTER_LONG_LABEL));

    snapshot.preferences.show_icon_labels = true;
    assert_eq!(label(&snapshot), Some(toolbar::INSERTER_CLOSE_LABEL));
    snapshot.is_inserter_opened = false;
    assert_eq!(label(&snapshot), Some(toolbar::INSERTER_ADD_LABEL));
}

#[test]
fn test_panel_toggles_expose_expanded_state() {
    let viewport = ViewportClass { is_large: true, is_wide: true };
    let snapshot = ToolbarSnapshot {
        is_inserter_opened: true,
        is_list_view_opened: false,
        list_view_shortcut: "Ctrl+Alt+O".to_owned(),
        ..ToolbarSnapshot::default()
    };
    let layout = layout_for(&snapshot, viewport, false, false);

    let inserter = layout.get(ControlKind::InserterToggle).unwrap();
    assert_eq!(inserter.aria_expanded, Some(true));
    assert!(inserter.pressed);

    let list_view = layout.get(ControlKind::ListViewToggle).unwrap();
    assert_eq!(list_view.aria_expanded, Some(false));
    assert_eq!(list_view.shortcut.as_deref(), Some("Ctrl+Alt+O"));

    assert_eq!(layout.get(ControlKind::Undo).unwrap().aria_expanded, None);
}

#[test]
fn test_disabled_block_tools_render_disabled_not_hidden() {
    let viewport = ViewportClass { is_large: true, is_wide: true };
    let snapshot = ToolbarSnapshot::default();
    let layout = layout_for(&snapshot, viewport, false, true);

    for kind in [
        ControlKind::InserterToggle,
        ControlKind::ToolSelector,
        ControlKind::ListViewToggle,
    ] {
        let control = layout.get(kind).expect("control should still render");
        assert!(control.disabled, "{kind:?} should be disabled");
    }
}

#[test]
fn test_undo_redo_follow_history() {
    let viewport = ViewportClass { is_large: true, is_wide: true };
    let snapshot = ToolbarSnapshot::default();
    let shortcuts = ShortcutRegistry::new(Platform::Other);
    let layout = compose(&ToolbarInputs {
        viewport,
        snapshot: &snapshot,
        history: HistoryAvailability { can_undo: true, can_redo: false },
        shortcuts: &shortcuts,
        disable_block_tools: false,
        zoom_out_experiment: false,
    });

    assert!(!layout.get(ControlKind::Undo).unwrap().disabled);
    assert!(layout.get(ControlKind::Redo).unwrap().disabled);
    assert!(layout.get(ControlKind::Undo).unwrap().shortcut.is_some());
}

#[test]
fn test_icon_labels_switch_button_variant() {
    let viewport = ViewportClass { is_large: true, is_wide: true };
    let mut snapshot = ToolbarSnapshot::default();
    let layout = layout_for(&snapshot, viewport, false, false);
    assert!(layout.controls.iter().all(|control| control.variant == ButtonVariant::Icon));
    assert!(layout.controls.iter().all(|control| control.show_tooltip));

    snapshot.preferences.show_icon_labels = true;
    let layout = layout_for(&snapshot, viewport, false, false);
    assert!(layout.controls.iter().all(|control| control.variant == ButtonVariant::Tertiary));
    assert!(layout.controls.iter().all(|control| !control.show_tooltip));
}

#[test]
fn test_tool_selector_reports_active_tool() {
    let viewport = ViewportClass { is_large: true, is_wide: true };
    let snapshot = ToolbarSnapshot {
        interaction_mode: InteractionMode::Navigation,
        ..ToolbarSnapshot::default()
    };
    let layout = layout_for(&snapshot, viewport, false, false);
    assert_eq!(
        layout.get(ControlKind::ToolSelector).unwrap().active_tool,
        Some(InteractionMode::Navigation)
    );
}
