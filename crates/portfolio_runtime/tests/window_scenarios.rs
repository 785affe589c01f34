use portfolio_runtime::{
    registry::{window_registry, WindowDescriptor},
    resolve, ContentCatalog, ContentNode, FileType, ItemAction, NavigationStore, WindowAction,
    WindowKey, WindowState, WindowStore, WindowsState, INITIAL_Z_INDEX,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn two_window_registry() -> Vec<WindowDescriptor> {
    let finder = *window_registry()
        .iter()
        .find(|entry| entry.key == WindowKey::Finder)
        .expect("finder descriptor");
    let browser = *window_registry()
        .iter()
        .find(|entry| entry.key == WindowKey::Browser)
        .expect("browser descriptor");
    vec![
        WindowDescriptor {
            can_open: true,
            ..finder
        },
        WindowDescriptor {
            can_open: false,
            ..browser
        },
    ]
}

fn assert_topmost(state: &WindowsState, expected: WindowKey) {
    let top = state.get(expected).expect("registered").z_index;
    let others_below = state
        .windows
        .iter()
        .filter(|(key, window)| **key != expected && window.is_open)
        .all(|(_, window)| window.z_index < top);
    assert!(others_below, "{expected} is not strictly topmost");
}

#[test]
fn dock_toggle_scenario_with_disabled_entry() {
    let mut store = WindowStore::new(&two_window_registry());

    store.toggle(WindowKey::Finder);
    let finder = store.state().get(WindowKey::Finder).expect("finder");
    assert!(finder.is_open);
    assert_eq!(finder.z_index, INITIAL_Z_INDEX + 1);

    let before = store.state().clone();
    store.toggle(WindowKey::Browser);
    assert_eq!(store.state(), &before);

    store.toggle(WindowKey::Finder);
    assert_eq!(
        store.state().get(WindowKey::Finder),
        Some(&WindowState::default())
    );
}

#[test]
fn operations_on_unregistered_windows_change_nothing() {
    let mut store = WindowStore::new(&two_window_registry());
    store.open(WindowKey::Finder, Some(json!({ "name": "kept" })));
    let before = store.state().clone();

    store.open(WindowKey::Contact, Some(json!(1)));
    store.focus(WindowKey::Contact);
    store.close(WindowKey::Contact);
    store.toggle(WindowKey::Contact);

    assert_eq!(store.state(), &before);
}

#[test]
fn last_opened_or_focused_window_stays_on_top_through_a_long_sequence() {
    let mut store = WindowStore::default();
    let script = [
        WindowAction::Open {
            key: WindowKey::Finder,
            data: None,
        },
        WindowAction::Open {
            key: WindowKey::Contact,
            data: None,
        },
        WindowAction::Open {
            key: WindowKey::TextViewer,
            data: Some(json!({ "name": "notes.txt" })),
        },
        WindowAction::Focus {
            key: WindowKey::Finder,
        },
        WindowAction::Close {
            key: WindowKey::Contact,
        },
        WindowAction::Open {
            key: WindowKey::Resume,
            data: None,
        },
        WindowAction::Focus {
            key: WindowKey::TextViewer,
        },
        WindowAction::Focus {
            key: WindowKey::Contact,
        },
    ];

    let mut last_raised = None;
    for action in script {
        let key = action.key();
        let raises = matches!(action, WindowAction::Open { .. } | WindowAction::Focus { .. });
        if store.dispatch(action) && raises {
            last_raised = Some(key);
        }
        if let Some(expected) = last_raised.filter(|key| store.state().is_open(*key)) {
            assert_topmost(store.state(), expected);
        }
    }

    assert_eq!(last_raised, Some(WindowKey::TextViewer));
    assert_eq!(
        store.state().stacking_order(),
        vec![WindowKey::Finder, WindowKey::Resume, WindowKey::TextViewer]
    );
    assert!(!store.state().is_open(WindowKey::Contact));
}

#[test]
fn open_then_focus_reorders_two_windows() {
    let mut store = WindowStore::default();
    store.open(WindowKey::Finder, None);
    store.open(WindowKey::Contact, None);
    store.focus(WindowKey::Finder);

    let finder = store.state().get(WindowKey::Finder).expect("finder").z_index;
    let contact = store.state().get(WindowKey::Contact).expect("contact").z_index;
    assert!(contact < finder);
}

#[test]
fn every_builtin_item_resolves_without_panicking() {
    let catalog = ContentCatalog::builtin().expect("catalog");
    let mut navigation = NavigationStore::new(catalog.default_location().clone());
    let mut windows = WindowStore::default();

    let mut pending = catalog
        .locations()
        .iter()
        .cloned()
        .map(ContentNode::Folder)
        .collect::<Vec<_>>();
    while let Some(node) = pending.pop() {
        let action = resolve(&node);
        match (&node, &action) {
            (ContentNode::Folder(folder), ItemAction::NavigateInto(target)) => {
                assert_eq!(folder, target);
                pending.extend(folder.children.iter().cloned());
            }
            (ContentNode::File(file), ItemAction::OpenViewer { window, .. }) => match file.file_type {
                FileType::Document => assert_eq!(*window, WindowKey::Resume),
                FileType::Text => assert_eq!(*window, WindowKey::TextViewer),
                FileType::Image => assert_eq!(*window, WindowKey::ImageViewer),
                other => panic!("{other:?} routed to a viewer"),
            },
            (ContentNode::File(file), ItemAction::OpenExternal(href)) => {
                assert!(file.file_type.is_link());
                assert_eq!(file.href.as_ref(), Some(href));
            }
            (ContentNode::File(file), ItemAction::NoOp) => {
                assert!(file.file_type.is_link() && file.href.is_none());
            }
            (node, action) => panic!("unexpected resolution {action:?} for {node:?}"),
        }
        portfolio_runtime::apply_item_action(action, &mut windows, &mut navigation);
    }
}
