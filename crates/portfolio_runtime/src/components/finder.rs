use leptos::*;

use super::{use_desktop_runtime, WindowHost};
use crate::{content::FolderNode, model::WindowKey};

#[component]
fn SidebarList(title: &'static str, folders: Vec<FolderNode>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div>
            <h3>{title}</h3>
            <ul>
                {folders
                    .into_iter()
                    .map(|folder| {
                        let active = {
                            let folder = folder.clone();
                            move || runtime.navigation.with(|nav| nav.active_location == folder)
                        };
                        let icon = folder.icon.clone();
                        let name = folder.name.clone();
                        view! {
                            <li
                                class:active=active
                                on:click=move |_| runtime.set_active_location(Some(folder.clone()))
                            >
                                <img src=icon class="w-4" alt=name.clone() />
                                <p class="text-sm font-medium truncate">{name}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub(super) fn FinderWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let (favorites, projects) = runtime
        .catalog
        .with_value(|catalog| (catalog.locations().to_vec(), catalog.projects()));
    // Sibling ids repeat across folders, so the list is rebuilt on every navigation.
    let items = move || runtime.navigation.with(|nav| nav.active_location.children.clone());

    view! {
        <WindowHost target=WindowKey::Finder title="Finder">
            <div class="finder">
                <div class="sidebar">
                    <SidebarList title="Favorites" folders=favorites />
                    <SidebarList title="My Projects" folders=projects />
                </div>
                <ul class="content">
                    {move || {
                        items()
                            .into_iter()
                            .map(|item| {
                                let class = item.position().unwrap_or_default().to_string();
                                let icon = item.icon().to_string();
                                let name = item.name().to_string();
                                view! {
                                    <li class=class on:click=move |_| runtime.open_item(&item)>
                                        <img src=icon alt=name.clone() />
                                        <p>{name}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </WindowHost>
    }
}
