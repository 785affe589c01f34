//! Drains queued [`crate::dispatch::DesktopEffect`]s through the host services.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executor that runs queued desktop effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear before running so effects queued while draining land in a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        let host = runtime.host.get_value();
        for effect in queued {
            host.run_desktop_effect(effect);
        }
    });
}
