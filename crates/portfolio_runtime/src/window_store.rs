//! Window actions, the transition function that applies them, and the observable store that
//! owns the resulting [`WindowsState`].

use leptos::logging;
use serde_json::Value;
use thiserror::Error;

use crate::{
    model::{WindowKey, WindowsState, INITIAL_Z_INDEX, MAX_Z_INDEX},
    observer::{Observers, SubscriptionId},
    registry::{window_registry, WindowDescriptor},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`].
pub enum WindowAction {
    /// Open a window and raise it, replacing its payload only when one is supplied.
    Open {
        /// Window to open.
        key: WindowKey,
        /// Optional payload shown by the window.
        data: Option<Value>,
    },
    /// Close a window, dropping its payload and resetting its stacking slot.
    Close {
        /// Window to close.
        key: WindowKey,
    },
    /// Raise an open window to the front.
    Focus {
        /// Window to focus.
        key: WindowKey,
    },
    /// Dock toggle: close when open, open otherwise.
    Toggle {
        /// Window associated with the dock entry.
        key: WindowKey,
    },
}

impl WindowAction {
    pub fn key(&self) -> WindowKey {
        match self {
            Self::Open { key, .. }
            | Self::Close { key }
            | Self::Focus { key }
            | Self::Toggle { key } => *key,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors for actions the store refuses to apply. State is never touched when one is returned.
pub enum WindowStoreError {
    /// The window is not part of this store's registry.
    #[error("window `{0}` is not registered")]
    UnknownWindow(WindowKey),
    /// The window exists but the dock may not toggle it.
    #[error("window `{0}` cannot be opened from the dock")]
    NotInvokable(WindowKey),
}

/// Applies `action` to `state`.
///
/// Returns `Ok(true)` when the state changed and `Ok(false)` for accepted no-ops (focusing a
/// closed window).
///
/// # Errors
///
/// Returns [`WindowStoreError`] when the action targets a window outside `registry` or toggles a
/// window whose descriptor is not invokable.
pub fn reduce_windows(
    state: &mut WindowsState,
    registry: &[WindowDescriptor],
    action: WindowAction,
) -> Result<bool, WindowStoreError> {
    let key = action.key();
    if !state.windows.contains_key(&key) {
        return Err(WindowStoreError::UnknownWindow(key));
    }

    match action {
        WindowAction::Open { key, data } => {
            let z_index = next_z_index(state);
            if let Some(window) = state.windows.get_mut(&key) {
                window.is_open = true;
                window.z_index = z_index;
                if data.is_some() {
                    window.data = data;
                }
            }
            Ok(true)
        }
        WindowAction::Close { key } => {
            if let Some(window) = state.windows.get_mut(&key) {
                window.is_open = false;
                window.z_index = INITIAL_Z_INDEX;
                window.data = None;
            }
            Ok(true)
        }
        WindowAction::Focus { key } => {
            if !state.is_open(key) {
                return Ok(false);
            }
            let z_index = next_z_index(state);
            if let Some(window) = state.windows.get_mut(&key) {
                window.z_index = z_index;
            }
            Ok(true)
        }
        WindowAction::Toggle { key } => {
            let invokable = registry
                .iter()
                .find(|entry| entry.key == key)
                .map(|entry| entry.can_open)
                .unwrap_or(false);
            if !invokable {
                return Err(WindowStoreError::NotInvokable(key));
            }
            let follow_up = if state.is_open(key) {
                WindowAction::Close { key }
            } else {
                WindowAction::Open { key, data: None }
            };
            reduce_windows(state, registry, follow_up)
        }
    }
}

fn next_z_index(state: &mut WindowsState) -> u32 {
    if state.next_z_index >= MAX_Z_INDEX {
        normalize_stack(state);
    }
    let z_index = state.next_z_index;
    state.next_z_index += 1;
    z_index
}

/// Re-packs open windows into consecutive z-indexes just above the baseline, keeping their
/// relative order, and rewinds the counter to the first free slot.
fn normalize_stack(state: &mut WindowsState) {
    let order = state.stacking_order();
    let mut next = INITIAL_Z_INDEX + 1;
    for key in order {
        if let Some(window) = state.windows.get_mut(&key) {
            window.z_index = next;
            next += 1;
        }
    }
    state.next_z_index = next;
}

/// Owns the window state for one session and notifies subscribers after every change.
///
/// Every operation swallows [`WindowStoreError`] after logging it so that a bad identifier in an
/// input handler never escapes into the UI event loop.
pub struct WindowStore {
    state: WindowsState,
    registry: Vec<WindowDescriptor>,
    observers: Observers<WindowsState>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(window_registry())
    }
}

impl WindowStore {
    /// Builds a store containing exactly the windows listed in `registry`.
    pub fn new(registry: &[WindowDescriptor]) -> Self {
        Self {
            state: WindowsState::with_keys(registry.iter().map(|entry| entry.key)),
            registry: registry.to_vec(),
            observers: Observers::default(),
        }
    }

    pub fn state(&self) -> &WindowsState {
        &self.state
    }

    pub fn registry(&self) -> &[WindowDescriptor] {
        &self.registry
    }

    pub fn open(&mut self, key: WindowKey, data: Option<Value>) {
        self.dispatch(WindowAction::Open { key, data });
    }

    pub fn close(&mut self, key: WindowKey) {
        self.dispatch(WindowAction::Close { key });
    }

    pub fn focus(&mut self, key: WindowKey) {
        self.dispatch(WindowAction::Focus { key });
    }

    pub fn toggle(&mut self, key: WindowKey) {
        self.dispatch(WindowAction::Toggle { key });
    }

    /// Applies `action`, logging rejected actions. Returns whether the state changed.
    pub fn dispatch(&mut self, action: WindowAction) -> bool {
        match reduce_windows(&mut self.state, &self.registry, action) {
            Ok(true) => {
                self.observers.notify(&self.state);
                true
            }
            Ok(false) => false,
            Err(err) => {
                logging::warn!("window store rejected action: {err}");
                false
            }
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&WindowsState) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
