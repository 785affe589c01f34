use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::WebExternalUrlService;
use portfolio_runtime::{DesktopHostContext, DesktopProvider, DesktopShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="A macOS-style desktop portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host = DesktopHostContext::new(Rc::new(WebExternalUrlService));

    view! {
        <DesktopProvider host=host>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="canonical-content not-found">
            <h1>"Nothing here"</h1>
            <A href="/">"Back to the desktop"</A>
        </section>
    }
}
