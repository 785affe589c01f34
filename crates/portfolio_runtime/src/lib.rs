//! Window-management core and Leptos shell for the portfolio desktop.
//!
//! [`window_store`] and [`navigation`] hold session state, [`dispatch`] turns clicked content
//! into store mutations, and [`window_host`] carries the rules every hosted window follows.

pub mod components;
pub mod content;
pub mod dispatch;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod navigation;
mod observer;
pub mod registry;
pub mod runtime_context;
pub mod window_host;
pub mod window_store;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use content::{ContentCatalog, ContentError, ContentNode, FileNode, FileType, FolderNode};
pub use dispatch::{apply_item_action, open_item, resolve, DesktopEffect, ItemAction};
pub use host::DesktopHostContext;
pub use model::*;
pub use navigation::{NavigationState, NavigationStore};
pub use observer::SubscriptionId;
pub use window_store::{reduce_windows, WindowAction, WindowStore, WindowStoreError};
