//! External URL adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open` with a `_blank` target.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_browser(url) })
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_browser(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "browser window unavailable".to_string())?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|err| format!("window.open failed for {url}: {err:?}"))?;
    if opened.is_none() {
        return Err(format!("window.open was blocked for {url}"));
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_browser(url: &str) -> Result<(), String> {
    Err(format!(
        "cannot open {url}: browser navigation is unavailable on this target"
    ))
}
