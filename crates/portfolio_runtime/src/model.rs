use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Z-index every closed window rests at.
pub const INITIAL_Z_INDEX: u32 = 1000;

/// Largest z-index a browser honours (signed 32-bit CSS integer).
pub const MAX_Z_INDEX: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowKey {
    Terminal,
    Browser,
    Resume,
    Finder,
    TextViewer,
    ImageViewer,
    Contact,
    Photo,
    HomeDesktop,
}

impl WindowKey {
    pub const ALL: [WindowKey; 9] = [
        Self::Terminal,
        Self::Browser,
        Self::Resume,
        Self::Finder,
        Self::TextViewer,
        Self::ImageViewer,
        Self::Contact,
        Self::Photo,
        Self::HomeDesktop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Browser => "browser",
            Self::Resume => "resume",
            Self::Finder => "finder",
            Self::TextViewer => "textViewer",
            Self::ImageViewer => "imageViewer",
            Self::Contact => "contact",
            Self::Photo => "photo",
            Self::HomeDesktop => "homeDesktop",
        }
    }

    /// DOM id of the host frame for this window.
    pub fn dom_id(self) -> String {
        format!("window-{}", self.as_str())
    }
}

impl fmt::Display for WindowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown window identifier `{0}`")]
pub struct WindowKeyParseError(pub String);

impl FromStr for WindowKey {
    type Err = WindowKeyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| WindowKeyParseError(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub is_open: bool,
    pub z_index: u32,
    pub data: Option<Value>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            is_open: false,
            z_index: INITIAL_Z_INDEX,
            data: None,
        }
    }
}

/// Snapshot of every registered window plus the shared stacking counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowsState {
    pub windows: BTreeMap<WindowKey, WindowState>,
    pub next_z_index: u32,
}

impl Default for WindowsState {
    fn default() -> Self {
        Self::with_keys(WindowKey::ALL)
    }
}

impl WindowsState {
    pub fn with_keys(keys: impl IntoIterator<Item = WindowKey>) -> Self {
        Self {
            windows: keys
                .into_iter()
                .map(|key| (key, WindowState::default()))
                .collect(),
            next_z_index: INITIAL_Z_INDEX + 1,
        }
    }

    pub fn get(&self, key: WindowKey) -> Option<&WindowState> {
        self.windows.get(&key)
    }

    pub fn is_open(&self, key: WindowKey) -> bool {
        self.get(key).map(|w| w.is_open).unwrap_or(false)
    }

    /// Returns the open window with the highest z-index.
    pub fn focused_window(&self) -> Option<WindowKey> {
        self.windows
            .iter()
            .filter(|(_, w)| w.is_open)
            .max_by_key(|(_, w)| w.z_index)
            .map(|(key, _)| *key)
    }

    /// Open windows ordered back to front.
    pub fn stacking_order(&self) -> Vec<WindowKey> {
        let mut open = self
            .windows
            .iter()
            .filter(|(_, w)| w.is_open)
            .map(|(key, w)| (w.z_index, *key))
            .collect::<Vec<_>>();
        open.sort();
        open.into_iter().map(|(_, key)| key).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window: WindowKey,
    pub pointer_start: PointerPosition,
    pub offset_start: WindowOffset,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_keys_round_trip_through_their_identifiers() {
        for key in WindowKey::ALL {
            assert_eq!(key.as_str().parse::<WindowKey>(), Ok(key));
        }
        assert_eq!(
            "txtfile".parse::<WindowKey>(),
            Err(WindowKeyParseError("txtfile".to_string()))
        );
    }

    #[test]
    fn fresh_state_has_every_window_closed_at_baseline() {
        let state = WindowsState::default();
        assert_eq!(state.windows.len(), WindowKey::ALL.len());
        assert!(state
            .windows
            .values()
            .all(|w| *w == WindowState::default()));
        assert_eq!(state.next_z_index, INITIAL_Z_INDEX + 1);
        assert_eq!(state.focused_window(), None);
    }
}
