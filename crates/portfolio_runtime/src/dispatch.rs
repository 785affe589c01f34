//! Item-open resolution: decides what clicking a content node does, then applies that decision
//! to the stores.

use leptos::logging;
use serde_json::Value;

use crate::{
    content::{ContentNode, FileType, FolderNode, NodeKind},
    model::WindowKey,
    navigation::NavigationStore,
    window_store::WindowStore,
};

/// Outcome of [`resolve`] for a clicked content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    NavigateInto(FolderNode),
    OpenExternal(String),
    OpenViewer {
        window: WindowKey,
        item: ContentNode,
    },
    NoOp,
}

/// Side effects the host executes after an action has been applied to the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopEffect {
    /// Open a URL outside the desktop.
    OpenExternalUrl(String),
}

const VIEWER_ROUTES: [(FileType, NodeKind, WindowKey); 2] = [
    (FileType::Text, NodeKind::File, WindowKey::TextViewer),
    (FileType::Image, NodeKind::File, WindowKey::ImageViewer),
];

/// Looks up the viewer window for a file type and node kind.
pub fn viewer_for(file_type: FileType, kind: NodeKind) -> Option<WindowKey> {
    VIEWER_ROUTES
        .iter()
        .find(|(route_type, route_kind, _)| *route_type == file_type && *route_kind == kind)
        .map(|(_, _, window)| *window)
}

/// Decides what opening `item` means. Check order matters: documents, folders, links with an
/// `href`, then the viewer table.
pub fn resolve(item: &ContentNode) -> ItemAction {
    let file = match item {
        ContentNode::File(file) if file.file_type == FileType::Document => {
            return ItemAction::OpenViewer {
                window: WindowKey::Resume,
                item: item.clone(),
            };
        }
        ContentNode::Folder(folder) => return ItemAction::NavigateInto(folder.clone()),
        ContentNode::File(file) => file,
    };

    if file.file_type.is_link() {
        if let Some(href) = &file.href {
            return ItemAction::OpenExternal(href.clone());
        }
    }

    match viewer_for(file.file_type, item.kind()) {
        Some(window) => ItemAction::OpenViewer {
            window,
            item: item.clone(),
        },
        None => ItemAction::NoOp,
    }
}

/// Applies a resolved action to the stores and returns host effects to run afterwards.
pub fn apply_item_action(
    action: ItemAction,
    windows: &mut WindowStore,
    navigation: &mut NavigationStore,
) -> Vec<DesktopEffect> {
    match action {
        ItemAction::NavigateInto(folder) => {
            navigation.set_active_location(Some(folder));
            Vec::new()
        }
        ItemAction::OpenExternal(href) => vec![DesktopEffect::OpenExternalUrl(href)],
        ItemAction::OpenViewer { window, item } => {
            windows.open(window, payload_for(&item));
            Vec::new()
        }
        ItemAction::NoOp => Vec::new(),
    }
}

/// Resolves and applies `item` in one step.
pub fn open_item(
    item: &ContentNode,
    windows: &mut WindowStore,
    navigation: &mut NavigationStore,
) -> Vec<DesktopEffect> {
    apply_item_action(resolve(item), windows, navigation)
}

/// Desktop folder click: browse `project` in Finder.
pub fn open_project_in_finder(
    project: &FolderNode,
    windows: &mut WindowStore,
    navigation: &mut NavigationStore,
) {
    navigation.set_active_location(Some(project.clone()));
    windows.open(WindowKey::Finder, None);
}

fn payload_for(item: &ContentNode) -> Option<Value> {
    match serde_json::to_value(item) {
        Ok(value) => Some(value),
        Err(err) => {
            logging::warn!("content payload encode failed for `{}`: {err}", item.name());
            None
        }
    }
}
