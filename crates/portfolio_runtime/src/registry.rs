//! Static window registry consumed by the dock and the window store.

use crate::model::WindowKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub key: WindowKey,
    pub label: &'static str,
    pub icon: &'static str,
    /// Whether the dock may toggle this window.
    pub can_open: bool,
    pub show_in_dock: bool,
}

const WINDOW_REGISTRY: [WindowDescriptor; 9] = [
    WindowDescriptor {
        key: WindowKey::Finder,
        label: "Portfolio",
        icon: "finder.png",
        can_open: true,
        show_in_dock: true,
    },
    WindowDescriptor {
        key: WindowKey::Browser,
        label: "Articles",
        icon: "safari.png",
        can_open: false,
        show_in_dock: true,
    },
    WindowDescriptor {
        key: WindowKey::Photo,
        label: "Gallery",
        icon: "photos.png",
        can_open: false,
        show_in_dock: true,
    },
    WindowDescriptor {
        key: WindowKey::Contact,
        label: "Contact",
        icon: "contact.png",
        can_open: true,
        show_in_dock: true,
    },
    WindowDescriptor {
        key: WindowKey::Terminal,
        label: "Skills",
        icon: "terminal.png",
        can_open: false,
        show_in_dock: true,
    },
    WindowDescriptor {
        key: WindowKey::Resume,
        label: "Resume",
        icon: "pdf.png",
        can_open: true,
        show_in_dock: false,
    },
    WindowDescriptor {
        key: WindowKey::TextViewer,
        label: "Text",
        icon: "txt.png",
        can_open: false,
        show_in_dock: false,
    },
    WindowDescriptor {
        key: WindowKey::ImageViewer,
        label: "Preview",
        icon: "image.png",
        can_open: false,
        show_in_dock: false,
    },
    WindowDescriptor {
        key: WindowKey::HomeDesktop,
        label: "Desktop",
        icon: "folder.png",
        can_open: false,
        show_in_dock: false,
    },
];

pub fn window_registry() -> &'static [WindowDescriptor] {
    &WINDOW_REGISTRY
}

pub fn dock_apps() -> Vec<WindowDescriptor> {
    window_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

pub fn window_descriptor(key: WindowKey) -> Option<&'static WindowDescriptor> {
    window_registry().iter().find(|entry| entry.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_window_key_once() {
        for key in WindowKey::ALL {
            let hits = window_registry().iter().filter(|d| d.key == key).count();
            assert_eq!(hits, 1, "{key} registered {hits} times");
        }
    }

    #[test]
    fn dock_lists_only_dock_entries_in_registry_order() {
        let dock = dock_apps()
            .into_iter()
            .map(|entry| entry.key)
            .collect::<Vec<_>>();
        assert_eq!(
            dock,
            vec![
                WindowKey::Finder,
                WindowKey::Browser,
                WindowKey::Photo,
                WindowKey::Contact,
                WindowKey::Terminal,
            ]
        );
    }
}
