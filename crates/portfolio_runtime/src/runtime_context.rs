//! Runtime provider and context wiring for the portfolio desktop.
//!
//! The provider owns one [`WindowStore`] and one [`NavigationStore`] for the session and mirrors
//! their state into Leptos signals through store subscriptions. UI composition stays in
//! [`crate::components`].

use std::cell::RefCell;

use leptos::*;
use serde_json::Value;

use crate::{
    content::{ContentCatalog, ContentNode, FolderNode},
    dispatch::{self, DesktopEffect},
    effect_executor,
    host::DesktopHostContext,
    model::{WindowKey, WindowsState},
    navigation::{NavigationState, NavigationStore},
    window_store::{WindowAction, WindowStore},
};

/// Stores owned by one desktop session.
pub struct DesktopStores {
    pub windows: WindowStore,
    pub navigation: NavigationStore,
}

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and mutating the session stores.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing desktop effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Static content tree.
    pub catalog: StoredValue<ContentCatalog>,
    /// Session stores. Signals below are updated by store subscriptions.
    pub stores: StoredValue<RefCell<DesktopStores>>,
    /// Reactive mirror of the window store.
    pub windows: RwSignal<WindowsState>,
    /// Reactive mirror of the navigation store.
    pub navigation: RwSignal<NavigationState>,
    /// Queue of effects waiting for the host.
    pub effects: RwSignal<Vec<DesktopEffect>>,
}

impl DesktopRuntimeContext {
    fn with_stores<T>(&self, f: impl FnOnce(&mut DesktopStores) -> T) -> T {
        self.stores.with_value(|stores| f(&mut stores.borrow_mut()))
    }

    pub fn dispatch_window(&self, action: WindowAction) {
        self.with_stores(|stores| {
            stores.windows.dispatch(action);
        });
    }

    pub fn open_window(&self, key: WindowKey, data: Option<Value>) {
        self.dispatch_window(WindowAction::Open { key, data });
    }

    pub fn close_window(&self, key: WindowKey) {
        self.dispatch_window(WindowAction::Close { key });
    }

    pub fn focus_window(&self, key: WindowKey) {
        self.dispatch_window(WindowAction::Focus { key });
    }

    pub fn toggle_window(&self, key: WindowKey) {
        self.dispatch_window(WindowAction::Toggle { key });
    }

    pub fn set_active_location(&self, location: Option<FolderNode>) {
        self.with_stores(|stores| stores.navigation.set_active_location(location));
    }

    /// Resolves a clicked content node and applies the result.
    pub fn open_item(&self, item: &ContentNode) {
        let effects = self.with_stores(|stores| {
            dispatch::open_item(item, &mut stores.windows, &mut stores.navigation)
        });
        self.queue_effects(effects);
    }

    pub fn open_project(&self, project: &FolderNode) {
        self.with_stores(|stores| {
            dispatch::open_project_in_finder(project, &mut stores.windows, &mut stores.navigation)
        });
    }

    /// Runs `f` against the window store without publishing anything itself; store listeners
    /// still fire for any change `f` makes.
    pub fn with_window_store<T>(&self, f: impl FnOnce(&mut WindowStore) -> T) -> T {
        self.with_stores(|stores| f(&mut stores.windows))
    }

    fn queue_effects(&self, new_effects: Vec<DesktopEffect>) {
        if new_effects.is_empty() {
            return;
        }
        let mut queue = self.effects.get_untracked();
        queue.extend(new_effects);
        self.effects.set(queue);
    }
}

fn load_catalog() -> Option<ContentCatalog> {
    match ContentCatalog::builtin() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            logging::warn!("content catalog load failed: {err}");
            None
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let Some(catalog) = load_catalog() else {
        return view! { <p class="desktop-error">"Desktop content is unavailable."</p> }.into_view();
    };

    let mut window_store = WindowStore::default();
    let mut navigation_store = NavigationStore::new(catalog.default_location().clone());

    let windows = create_rw_signal(window_store.state().clone());
    let navigation = create_rw_signal(navigation_store.state().clone());
    let effects = create_rw_signal(Vec::<DesktopEffect>::new());

    // Listeners only write signals; views never re-enter the stores while they are notifying.
    window_store.subscribe(move |state: &WindowsState| windows.set(state.clone()));
    navigation_store.subscribe(move |state: &NavigationState| navigation.set(state.clone()));

    let runtime = DesktopRuntimeContext {
        host: store_value(host.unwrap_or_default()),
        catalog: store_value(catalog),
        stores: store_value(RefCell::new(DesktopStores {
            windows: window_store,
            navigation: navigation_store,
        })),
        windows,
        navigation,
        effects,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
