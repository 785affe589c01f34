use leptos::*;

use super::{use_desktop_runtime, window::pointer_from_event};
use crate::{
    content::FolderNode,
    model::WindowOffset,
    window_host::{translate_style, DragAnchor, SetupGuard},
};

pub(super) fn folder_class(project: &FolderNode) -> String {
    format!(
        "group folder {}",
        project.window_position.as_deref().unwrap_or_default()
    )
}

#[component]
/// Project folders scattered over the desktop; clicking one browses it in Finder.
pub(super) fn Home() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let projects = runtime.catalog.with_value(|catalog| catalog.projects());

    view! {
        <section id="home">
            <ul>
                {projects
                    .into_iter()
                    .map(|project| view! { <DesktopFolder project=project /> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
/// One desktop folder. It can be dragged anywhere; a press that does not move opens it.
fn DesktopFolder(project: FolderNode) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let offset = create_rw_signal(WindowOffset::default());
    let anchor = create_rw_signal(None::<DragAnchor>);
    let dragged = create_rw_signal(false);

    let guard = SetupGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    let move_listener = window_event_listener(ev::pointermove, {
        let guard = guard.clone();
        move |ev| {
            guard.run_if_active(|| {
                let Some(start) = anchor.get_untracked() else {
                    return;
                };
                let pointer = pointer_from_event(&ev);
                if dragged.get_untracked() || start.is_drag(pointer) {
                    dragged.set(true);
                    offset.set(start.offset_at(pointer));
                }
            });
        }
    });
    on_cleanup(move || move_listener.remove());

    let release_listener = window_event_listener(ev::pointerup, move |_| {
        guard.run_if_active(|| {
            if anchor.get_untracked().is_some() {
                anchor.set(None);
            }
        });
    });
    on_cleanup(move || release_listener.remove());

    let press = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        dragged.set(false);
        anchor.set(Some(DragAnchor::new(
            pointer_from_event(&ev),
            offset.get_untracked(),
        )));
    };

    let class = folder_class(&project);
    let name = project.name.clone();
    let open = move |_| {
        if dragged.get_untracked() {
            dragged.set(false);
            return;
        }
        runtime.open_project(&project);
    };

    view! {
        <li
            class=class
            style=move || translate_style(offset.get())
            on:pointerdown=press
            on:click=open
        >
            <img src="/images/folder.png" alt=name.clone() draggable="false" />
            <p>{name}</p>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{content::ContentCatalog, model::PointerPosition};

    #[test]
    fn folders_keep_their_desktop_placement_class() {
        let catalog = ContentCatalog::builtin().expect("catalog");
        for project in catalog.projects() {
            let class = folder_class(&project);
            assert!(class.starts_with("group folder"));
            if let Some(position) = &project.window_position {
                assert!(class.ends_with(position.as_str()), "{class}");
            }
        }
    }

    #[test]
    fn folder_drag_moves_from_where_the_last_drag_ended() {
        let first = DragAnchor::new(PointerPosition { x: 10, y: 10 }, WindowOffset::default());
        let dropped = first.offset_at(PointerPosition { x: 60, y: 25 });
        assert_eq!(dropped, WindowOffset { dx: 50, dy: 15 });

        let second = DragAnchor::new(PointerPosition { x: 200, y: 200 }, dropped);
        let dropped = second.offset_at(PointerPosition { x: 190, y: 240 });
        assert_eq!(dropped, WindowOffset { dx: 40, dy: 55 });
        assert_eq!(translate_style(dropped), "transform:translate(40px,55px);");
    }

    #[test]
    fn teardown_stops_folder_listeners_from_writing() {
        let guard = SetupGuard::new();
        let listener = guard.clone();
        let mut writes = 0;

        listener.run_if_active(|| writes += 1);
        guard.cancel();
        listener.run_if_active(|| writes += 1);

        assert_eq!(writes, 1);
    }
}
