//! Behaviour shared by every hosted window: visibility, stacking, focus-on-press and drag.
//!
//! The [`crate::components`] `WindowHost` component renders through these helpers so the rules
//! stay testable without a DOM.

use std::{cell::Cell, rc::Rc};

use crate::{
    model::{DragSession, PointerPosition, WindowKey, WindowOffset, WindowsState},
    window_store::WindowStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    Closed,
    OpenUnfocused,
    OpenFocused,
}

pub fn window_phase(state: &WindowsState, key: WindowKey) -> WindowPhase {
    if !state.is_open(key) {
        WindowPhase::Closed
    } else if state.focused_window() == Some(key) {
        WindowPhase::OpenFocused
    } else {
        WindowPhase::OpenUnfocused
    }
}

/// Render-ready view of one window's host frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFrame {
    pub key: WindowKey,
    pub visible: bool,
    pub z_index: u32,
    pub focused: bool,
}

impl HostFrame {
    pub fn from_state(state: &WindowsState, key: WindowKey) -> Self {
        let window = state.get(key);
        Self {
            key,
            visible: window.map(|w| w.is_open).unwrap_or(false),
            z_index: window.map(|w| w.z_index).unwrap_or_default(),
            focused: window_phase(state, key) == WindowPhase::OpenFocused,
        }
    }

    /// Inline style for the absolutely positioned frame. Hidden frames stay mounted.
    pub fn style(&self, offset: WindowOffset) -> String {
        format!(
            "display:{};z-index:{};{}",
            if self.visible { "block" } else { "none" },
            self.z_index,
            translate_style(offset)
        )
    }
}

/// Starts a drag on `key`. The window is focused before the session exists, so the frame being
/// manipulated is always frontmost.
pub fn begin_interaction(
    store: &mut WindowStore,
    key: WindowKey,
    pointer: PointerPosition,
    offset: WindowOffset,
) -> DragSession {
    store.focus(key);
    DragSession {
        window: key,
        pointer_start: pointer,
        offset_start: offset,
    }
}

pub fn drag_offset(session: &DragSession, pointer: PointerPosition) -> WindowOffset {
    DragAnchor {
        pointer_start: session.pointer_start,
        offset_start: session.offset_start,
    }
    .offset_at(pointer)
}

/// Pointer distance below which a press still counts as a click.
pub const DRAG_THRESHOLD: i32 = 3;

/// Free drag of an element the window store does not track, such as a desktop folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub pointer_start: PointerPosition,
    pub offset_start: WindowOffset,
}

impl DragAnchor {
    pub fn new(pointer: PointerPosition, offset: WindowOffset) -> Self {
        Self {
            pointer_start: pointer,
            offset_start: offset,
        }
    }

    pub fn offset_at(&self, pointer: PointerPosition) -> WindowOffset {
        WindowOffset {
            dx: self.offset_start.dx + pointer.x - self.pointer_start.x,
            dy: self.offset_start.dy + pointer.y - self.pointer_start.y,
        }
    }

    /// Whether `pointer` has travelled far enough from the press to count as a drag.
    pub fn is_drag(&self, pointer: PointerPosition) -> bool {
        (pointer.x - self.pointer_start.x).abs() > DRAG_THRESHOLD
            || (pointer.y - self.pointer_start.y).abs() > DRAG_THRESHOLD
    }
}

pub fn translate_style(offset: WindowOffset) -> String {
    format!("transform:translate({}px,{}px);", offset.dx, offset.dy)
}

/// Cancellation flag for work scheduled outside the synchronous render path.
///
/// Created when a view sets up a timer or deferred task; the view's teardown calls
/// [`SetupGuard::cancel`] and the deferred work checks [`SetupGuard::is_active`] before acting.
#[derive(Debug, Clone)]
pub struct SetupGuard {
    alive: Rc<Cell<bool>>,
}

impl Default for SetupGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupGuard {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.alive.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.alive.get()
    }

    /// Runs `f` only while the owning view is still alive.
    pub fn run_if_active<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_active().then(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::INITIAL_Z_INDEX;

    #[test]
    fn phases_follow_open_focus_close() {
        let mut store = WindowStore::default();
        assert_eq!(
            window_phase(store.state(), WindowKey::Finder),
            WindowPhase::Closed
        );

        store.open(WindowKey::Finder, None);
        assert_eq!(
            window_phase(store.state(), WindowKey::Finder),
            WindowPhase::OpenFocused
        );

        store.open(WindowKey::Contact, None);
        assert_eq!(
            window_phase(store.state(), WindowKey::Finder),
            WindowPhase::OpenUnfocused
        );

        store.focus(WindowKey::Finder);
        assert_eq!(
            window_phase(store.state(), WindowKey::Finder),
            WindowPhase::OpenFocused
        );

        store.close(WindowKey::Finder);
        assert_eq!(
            window_phase(store.state(), WindowKey::Finder),
            WindowPhase::Closed
        );
        assert_eq!(
            window_phase(store.state(), WindowKey::Contact),
            WindowPhase::OpenFocused
        );
    }

    #[test]
    fn closed_frames_are_hidden_but_keep_their_style_slot() {
        let store = WindowStore::default();
        let frame = HostFrame::from_state(store.state(), WindowKey::Resume);
        assert!(!frame.visible);
        assert_eq!(
            frame.style(WindowOffset::default()),
            format!("display:none;z-index:{INITIAL_Z_INDEX};transform:translate(0px,0px);")
        );
    }

    #[test]
    fn pressing_a_back_window_raises_it_before_dragging() {
        let mut store = WindowStore::default();
        store.open(WindowKey::Finder, None);
        store.open(WindowKey::Contact, None);

        let session = begin_interaction(
            &mut store,
            WindowKey::Finder,
            PointerPosition { x: 10, y: 10 },
            WindowOffset { dx: 5, dy: 0 },
        );

        assert_eq!(store.state().focused_window(), Some(WindowKey::Finder));
        assert_eq!(
            drag_offset(&session, PointerPosition { x: 30, y: -5 }),
            WindowOffset { dx: 25, dy: -15 }
        );
    }

    #[test]
    fn free_drags_accumulate_from_the_previous_offset() {
        let anchor = DragAnchor::new(
            PointerPosition { x: 100, y: 50 },
            WindowOffset { dx: 20, dy: -10 },
        );

        assert!(!anchor.is_drag(PointerPosition { x: 102, y: 47 }));
        assert!(anchor.is_drag(PointerPosition { x: 100, y: 54 }));

        let moved = anchor.offset_at(PointerPosition { x: 140, y: 30 });
        assert_eq!(moved, WindowOffset { dx: 60, dy: -30 });
        assert_eq!(translate_style(moved), "transform:translate(60px,-30px);");
    }

    #[test]
    fn cancelled_guard_skips_deferred_work() {
        let guard = SetupGuard::new();
        let deferred = guard.clone();
        assert_eq!(deferred.run_if_active(|| 1), Some(1));

        guard.cancel();

        assert!(!deferred.is_active());
        assert_eq!(deferred.run_if_active(|| 1), None);
    }
}
