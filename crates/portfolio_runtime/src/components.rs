//! Desktop UI composition: menu bar, welcome heading, desktop folders, hosted windows and the dock.

mod contact;
mod dock;
mod finder;
mod home;
mod menu_bar;
mod viewers;
mod welcome;
mod window;

use leptos::*;

use self::{
    contact::ContactWindow,
    dock::Dock,
    finder::FinderWindow,
    home::Home,
    menu_bar::MenuBar,
    viewers::{ImageWindow, ResumeWindow, TextWindow},
    welcome::Welcome,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use window::{WindowControls, WindowHost};

#[component]
/// Full desktop: menu bar, welcome heading, dock, every hosted window and the desktop folders.
pub fn DesktopShell() -> impl IntoView {
    view! {
        <main class="desktop-shell">
            <MenuBar />
            <Welcome />
            <Dock />
            <ResumeWindow />
            <FinderWindow />
            <TextWindow />
            <ImageWindow />
            <ContactWindow />
            <Home />
        </main>
    }
}
