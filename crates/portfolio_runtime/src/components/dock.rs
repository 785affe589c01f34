use leptos::*;

use super::use_desktop_runtime;
use crate::registry::dock_apps;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <section id="dock">
            <div class="dock-container">
                {dock_apps()
                    .into_iter()
                    .map(|app| {
                        let key = app.key;
                        let is_open = move || runtime.windows.with(|state| state.is_open(key));
                        let toggle = move |_| {
                            // Disabled entries never reach the store.
                            if app.can_open {
                                runtime.toggle_window(key);
                            }
                        };

                        view! {
                            <div class="dock-slot">
                                <button
                                    type="button"
                                    class="dock-icon"
                                    class:active=is_open
                                    aria-label=app.label
                                    title=app.label
                                    disabled=!app.can_open
                                    on:click=toggle
                                >
                                    <img
                                        src=format!("/images/{}", app.icon)
                                        alt=app.label
                                        loading="lazy"
                                        class:dimmed=!app.can_open
                                    />
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
