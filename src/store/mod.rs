//! Observable state containers the toolbar reads from and dispatches to.
//!
//! The toolbar treats stores as opaque: it reads a state snapshot, subscribes
//! for change notifications and dispatches actions. `StateStore` is the
//! in-process implementation used by the demo app and the tests.

mod actions;
mod state;

pub use actions::{BlockEditorAction, EditorAction, PreferenceKey, PreferencesAction};
pub use state::{
    BlockEditorState, DeviceType, EditorMode, EditorState, InteractionMode, PreferenceFlags,
    PreferencesState,
};

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::StoreError;

/// Callback invoked after a dispatch changed the store's state.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(Uuid);

/// The get / subscribe / dispatch surface of a state container.
pub trait Store {
    type State: Clone;
    type Action;

    fn get(&self) -> Result<Self::State, StoreError>;

    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Returns false if the subscription was unknown.
    fn unsubscribe(&self, subscription: Subscription) -> bool;

    fn dispatch(&self, action: Self::Action);
}

/// State that knows how to apply its own actions.
pub trait Reduce: Clone + Send + Sync + 'static {
    type Action: std::fmt::Debug;

    /// Name used in logs and errors.
    const NAME: &'static str;

    /// Applies `action`, returning true if the state changed.
    fn reduce(&mut self, action: Self::Action) -> bool;
}

struct Inner<S> {
    state: RwLock<Option<S>>,
    listeners: Mutex<Vec<(Uuid, Listener)>>,
}

/// Shared, cloneable store over a reducible state.
pub struct StateStore<S: Reduce> {
    inner: Arc<Inner<S>>,
}

impl<S: Reduce> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Reduce> std::fmt::Debug for StateStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("name", &S::NAME)
            .field("initialized", &self.is_initialized())
            .field("listeners", &format!("<{} listeners>", self.listener_count()))
            .finish()
    }
}

impl<S: Reduce + Default> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Reduce> StateStore<S> {
    pub fn new(state: S) -> Self {
        Self::with_state(Some(state))
    }

    /// A store that has no state yet; reads fail until [`StateStore::initialize`].
    pub fn uninitialized() -> Self {
        Self::with_state(None)
    }

    fn with_state(state: Option<S>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.state.read().is_some()
    }

    /// Sets the state and notifies listeners.
    pub fn initialize(&self, state: S) {
        *self.inner.state.write() = Some(state);
        log::debug!("store `{}` initialized", S::NAME);
        self.notify();
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    fn notify(&self) {
        // Listeners run without any lock held so they can read or dispatch.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl<S: Reduce> Store for StateStore<S> {
    type State = S;
    type Action = S::Action;

    fn get(&self) -> Result<S, StoreError> {
        self.inner
            .state
            .read()
            .clone()
            .ok_or(StoreError::Uninitialized { store: S::NAME })
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = Uuid::new_v4();
        self.inner.listeners.lock().push((id, listener));
        Subscription(id)
    }

    fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription.0);
        listeners.len() != before
    }

    fn dispatch(&self, action: S::Action) {
        let changed = {
            let mut state = self.inner.state.write();
            match state.as_mut() {
                Some(state) => {
                    log::debug!("dispatch to `{}`: {:?}", S::NAME, action);
                    state.reduce(action)
                }
                None => {
                    log::warn!("dropping {:?}: store `{}` is not initialized", action, S::NAME);
                    false
                }
            }
        };
        if changed {
            self.notify();
        }
    }
}
