//! Reads one coherent toolbar snapshot out of several independent stores.
//!
//! [`read_snapshot`] is the synchronous read. [`SnapshotAggregator`] keeps a
//! cached snapshot current by subscribing to every store separately and
//! recomputing on any upstream change.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::shortcuts::{self, ShortcutRegistry};
use crate::store::{
    BlockEditorState, DeviceType, EditorMode, EditorState, InteractionMode, Listener,
    PreferenceFlags, PreferencesState, StateStore, Store, Subscription,
};

/// Everything the toolbar reads from the stores in one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarSnapshot {
    pub preferences: PreferenceFlags,
    pub is_inserter_opened: bool,
    pub is_list_view_opened: bool,
    pub editor_mode: EditorMode,
    pub interaction_mode: InteractionMode,
    pub device_type: DeviceType,
    /// Pre-formatted display string for the list view shortcut.
    pub list_view_shortcut: String,
}

impl ToolbarSnapshot {
    pub fn is_zoomed_out(&self) -> bool {
        self.interaction_mode == InteractionMode::ZoomOut
    }
}

/// The stores and registry a snapshot is read from.
#[derive(Debug, Clone, Default)]
pub struct StoreSet {
    pub editor: StateStore<EditorState>,
    pub block_editor: StateStore<BlockEditorState>,
    pub preferences: StateStore<PreferencesState>,
    pub shortcuts: Arc<ShortcutRegistry>,
}

impl StoreSet {
    /// A set whose stores have no state yet.
    pub fn uninitialized(shortcuts: ShortcutRegistry) -> Self {
        Self {
            editor: StateStore::uninitialized(),
            block_editor: StateStore::uninitialized(),
            preferences: StateStore::uninitialized(),
            shortcuts: Arc::new(shortcuts),
        }
    }
}

fn read_or_default<S: Store>(store: &S) -> S::State
where
    S::State: Default,
{
    store.get().unwrap_or_else(|err| {
        log::debug!("{err}; reading defaults");
        S::State::default()
    })
}

/// Reads the current snapshot. Stores that are not ready contribute defaults.
pub fn read_snapshot(stores: &StoreSet) -> ToolbarSnapshot {
    let editor = read_or_default(&stores.editor);
    let block_editor = read_or_default(&stores.block_editor);
    let preferences = read_or_default(&stores.preferences);

    ToolbarSnapshot {
        preferences: preferences.flags,
        is_inserter_opened: editor.inserter_opened,
        is_list_view_opened: editor.list_view_opened,
        editor_mode: editor.editor_mode,
        interaction_mode: block_editor.interaction_mode,
        device_type: editor.device_type,
        list_view_shortcut: stores.shortcuts.display(shortcuts::TOGGLE_LIST_VIEW),
    }
}

struct Shared {
    snapshot: RwLock<ToolbarSnapshot>,
    revision: AtomicU64,
}

/// Keeps a snapshot current across all stores in a [`StoreSet`].
///
/// Unsubscribes from every store when dropped.
pub struct SnapshotAggregator {
    stores: StoreSet,
    shared: Arc<Shared>,
    subscriptions: [Subscription; 3],
}

impl SnapshotAggregator {
    pub fn new(stores: StoreSet) -> Self {
        Self::with_change_hook(stores, |_| {})
    }

    /// `on_change` runs after every recompute, e.g. to request a repaint.
    pub fn with_change_hook(
        stores: StoreSet,
        on_change: impl Fn(&ToolbarSnapshot) + Send + Sync + 'static,
    ) -> Self {
        let shared = Arc::new(Shared {
            snapshot: RwLock::new(read_snapshot(&stores)),
            revision: AtomicU64::new(0),
        });

        let on_change: Arc<dyn Fn(&ToolbarSnapshot) + Send + Sync> = Arc::new(on_change);
        let recompute: Listener = {
            let shared = Arc::clone(&shared);
            // Holds a clone of the set; the cycle is broken by `Drop`.
            let stores = stores.clone();
            Arc::new(move || {
                // Read under the write lock so a stale read cannot land last.
                let snapshot = {
                    let mut current = shared.snapshot.write();
                    *current = read_snapshot(&stores);
                    shared.revision.fetch_add(1, Ordering::SeqCst);
                    current.clone()
                };
                on_change(&snapshot);
            })
        };

        let subscriptions = [
            stores.editor.subscribe(Arc::clone(&recompute)),
            stores.block_editor.subscribe(Arc::clone(&recompute)),
            stores.preferences.subscribe(recompute),
        ];

        Self {
            stores,
            shared,
            subscriptions,
        }
    }

    pub fn snapshot(&self) -> ToolbarSnapshot {
        self.shared.snapshot.read().clone()
    }

    /// Number of recomputes since construction.
    pub fn revision(&self) -> u64 {
        self.shared.revision.load(Ordering::SeqCst)
    }
}

impl Drop for SnapshotAggregator {
    fn drop(&mut self) {
        let [editor, block_editor, preferences] = self.subscriptions;
        self.stores.editor.unsubscribe(editor);
        self.stores.block_editor.unsubscribe(block_editor);
        self.stores.preferences.unsubscribe(preferences);
    }
}
