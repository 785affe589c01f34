use std::time::Duration;

use leptos::*;

use super::use_desktop_runtime;
use crate::{
    model::{DragSession, PointerPosition, WindowKey, WindowOffset},
    window_host::{begin_interaction, drag_offset, HostFrame, SetupGuard},
};

const ENTRANCE_DELAY: Duration = Duration::from_millis(16);

pub(super) fn pointer_from_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[component]
/// Wraps any window body with the shared host behaviour: visibility, stacking, focus on press
/// and header dragging.
pub fn WindowHost(
    /// Window whose state drives this frame.
    target: WindowKey,
    /// Header title.
    #[prop(into)]
    title: MaybeSignal<String>,
    /// Extra header content rendered after the title.
    #[prop(optional)]
    header_extra: Option<View>,
    children: Children,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let frame =
        create_memo(move |_| runtime.windows.with(|state| HostFrame::from_state(state, target)));
    let offset = create_rw_signal(WindowOffset::default());
    let drag = create_rw_signal(None::<DragSession>);
    let entered = create_rw_signal(false);

    let guard = SetupGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    create_effect(move |was_visible: Option<bool>| {
        let visible = frame.get().visible;
        if !visible {
            entered.set(false);
        } else if was_visible != Some(true) {
            let guard = guard.clone();
            set_timeout(
                move || {
                    guard.run_if_active(|| entered.set(true));
                },
                ENTRANCE_DELAY,
            );
        }
        visible
    });

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if let Some(session) = drag.get_untracked() {
            offset.set(drag_offset(&session, pointer_from_event(&ev)));
        }
    });
    on_cleanup(move || move_listener.remove());

    let release_listener = window_event_listener(ev::pointerup, move |_| {
        if drag.get_untracked().is_some() {
            drag.set(None);
        }
    });
    on_cleanup(move || release_listener.remove());

    let focus = move |_: web_sys::PointerEvent| runtime.focus_window(target);
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.stop_propagation();
        let session = runtime.with_window_store(|store| {
            begin_interaction(
                store,
                target,
                pointer_from_event(&ev),
                offset.get_untracked(),
            )
        });
        drag.set(Some(session));
    };

    view! {
        <section
            id=target.dom_id()
            class=move || {
                let current = frame.get();
                format!(
                    "window-host{}{}",
                    if current.focused { " focused" } else { "" },
                    if entered.get() { " entered" } else { "" },
                )
            }
            style=move || frame.get().style(offset.get())
            on:pointerdown=focus
        >
            <header class="window-header" on:pointerdown=begin_drag>
                <WindowControls target=target />
                <h2>{move || title.get()}</h2>
                {header_extra}
            </header>
            <div class="window-body">{children()}</div>
        </section>
    }
}

#[component]
/// macOS-style header buttons. Only close is wired; minimize and maximize are decorative.
pub fn WindowControls(target: WindowKey) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="window-controls">
            <button
                type="button"
                class="close"
                aria-label="Close window"
                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                on:click=move |_| runtime.close_window(target)
            />
            <span class="minimize" aria-hidden="true" />
            <span class="maximize" aria-hidden="true" />
        </div>
    }
}
