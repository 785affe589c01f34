//! Host-side services used to execute [`DesktopEffect`]s emitted by the dispatch layer.

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};

use crate::dispatch::DesktopEffect;

#[derive(Clone)]
/// Host service bundle injected into [`crate::DesktopProvider`].
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(NoopExternalUrlService))
    }
}

impl DesktopHostContext {
    pub fn new(external_urls: Rc<dyn ExternalUrlService>) -> Self {
        Self { external_urls }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Hands `url` to the external URL service. The returned future resolves once the host has
    /// accepted or refused the link.
    pub fn open_external<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        self.external_urls.open_url(url)
    }

    /// Executes a single [`DesktopEffect`] asynchronously. Failures are logged, never raised.
    pub fn run_desktop_effect(&self, effect: DesktopEffect) {
        match effect {
            DesktopEffect::OpenExternalUrl(url) => {
                let host = self.clone();
                spawn_local(async move {
                    if let Err(err) = host.open_external(&url).await {
                        logging::warn!("open external url failed for `{url}`: {err}");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::RecordingExternalUrlService;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        content::{ContentCatalog, ContentNode},
        dispatch::open_item,
        navigation::NavigationStore,
        window_store::WindowStore,
    };

    fn run_effects(host: &DesktopHostContext, effects: Vec<DesktopEffect>) -> Vec<Result<(), String>> {
        effects
            .into_iter()
            .map(|effect| match effect {
                DesktopEffect::OpenExternalUrl(url) => block_on(host.open_external(&url)),
            })
            .collect()
    }

    #[test]
    fn clicked_link_files_reach_the_url_service() {
        let catalog = ContentCatalog::builtin().expect("catalog");
        let mut windows = WindowStore::default();
        let mut navigation = NavigationStore::new(catalog.default_location().clone());
        let recorder = Rc::new(RecordingExternalUrlService::default());
        let host = DesktopHostContext::new(recorder.clone());

        let links = catalog
            .projects()
            .into_iter()
            .flat_map(|project| project.children)
            .filter_map(|node| match node {
                ContentNode::File(file) if file.file_type.is_link() => Some(file),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert!(links.iter().any(|file| file.href.is_some()));

        let mut expected = Vec::new();
        for file in links {
            if let Some(href) = &file.href {
                expected.push(href.clone());
            }
            let effects = open_item(&ContentNode::File(file), &mut windows, &mut navigation);
            assert!(run_effects(&host, effects).iter().all(Result::is_ok));
        }

        assert_eq!(recorder.opened(), expected);
        assert!(windows.state().stacking_order().is_empty());
    }

    #[test]
    fn refused_links_surface_the_service_error() {
        let recorder = Rc::new(RecordingExternalUrlService::default());
        let host = DesktopHostContext::new(recorder.clone());

        let results = run_effects(&host, vec![DesktopEffect::OpenExternalUrl(" ".to_string())]);

        assert_eq!(results, vec![Err("refusing to open an empty url".to_string())]);
        assert!(recorder.opened().is_empty());
    }

    #[test]
    fn default_host_accepts_links_without_navigating() {
        let host = DesktopHostContext::default();
        assert_eq!(block_on(host.open_external("https://example.com")), Ok(()));
    }
}
