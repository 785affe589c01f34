//! Tracks the folder shown in the Finder window.

use crate::{
    content::FolderNode,
    observer::{Observers, SubscriptionId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_location: FolderNode,
}

pub struct NavigationStore {
    state: NavigationState,
    default_location: FolderNode,
    observers: Observers<NavigationState>,
}

impl NavigationStore {
    pub fn new(default_location: FolderNode) -> Self {
        Self {
            state: NavigationState {
                active_location: default_location.clone(),
            },
            default_location,
            observers: Observers::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_location(&self) -> &FolderNode {
        &self.state.active_location
    }

    /// Replaces the active folder. `None` means no change was requested.
    pub fn set_active_location(&mut self, location: Option<FolderNode>) {
        let Some(location) = location else {
            return;
        };
        self.state.active_location = location;
        self.observers.notify(&self.state);
    }

    pub fn reset_active_location(&mut self) {
        self.state.active_location = self.default_location.clone();
        self.observers.notify(&self.state);
    }

    pub fn subscribe(&mut self, listener: impl Fn(&NavigationState) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
