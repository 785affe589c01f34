//! Payload-driven viewer windows. Each reads its window's `data` and renders nothing when the
//! payload is missing or is not a file node.

use leptos::*;
use serde_json::Value;

use super::{use_desktop_runtime, WindowHost};
use crate::{
    content::{ContentNode, FileNode},
    model::WindowKey,
};

pub(super) const DEFAULT_RESUME_PATH: &str = "files/resume.pdf";

/// Decodes a window payload into the file node it was opened with.
pub(super) fn decode_file_payload(data: Option<&Value>) -> Option<FileNode> {
    let node = serde_json::from_value::<ContentNode>(data?.clone()).ok()?;
    match node {
        ContentNode::File(file) => Some(file),
        ContentNode::Folder(_) => None,
    }
}

pub(super) fn resume_source(data: Option<&Value>) -> String {
    decode_file_payload(data)
        .and_then(|file| file.href)
        .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string())
}

fn window_payload(key: WindowKey) -> Memo<Option<FileNode>> {
    let runtime = use_desktop_runtime();
    create_memo(move |_| {
        runtime
            .windows
            .with(|state| decode_file_payload(state.get(key).and_then(|w| w.data.as_ref())))
    })
}

#[component]
pub(super) fn TextWindow() -> impl IntoView {
    let file = window_payload(WindowKey::TextViewer);
    let title = Signal::derive(move || file.get().map(|f| f.name).unwrap_or_default());

    view! {
        <WindowHost target=WindowKey::TextViewer title=title>
            {move || {
                file.get()
                    .map(|file| {
                        view! {
                            <div class="text-viewer">
                                {file.image.map(|src| {
                                    view! {
                                        <img src=src alt=file.name.clone() class="w-full h-auto rounded" />
                                    }
                                })}
                                {file.subtitle.map(|subtitle| view! { <h3>{subtitle}</h3> })}
                                {(!file.description.is_empty()).then(|| {
                                    view! {
                                        <div class="text-viewer-body">
                                            {file.description
                                                .into_iter()
                                                .map(|paragraph| view! { <p>{paragraph}</p> })
                                                .collect_view()}
                                        </div>
                                    }
                                })}
                            </div>
                        }
                    })
            }}
        </WindowHost>
    }
}

#[component]
pub(super) fn ImageWindow() -> impl IntoView {
    let file = window_payload(WindowKey::ImageViewer);
    let title = Signal::derive(move || file.get().map(|f| f.name).unwrap_or_default());

    view! {
        <WindowHost target=WindowKey::ImageViewer title=title>
            {move || {
                file.get()
                    .and_then(|file| {
                        let name = file.name;
                        file.image_url.map(|src| {
                            view! {
                                <div class="image-viewer">
                                    <img src=src alt=name class="w-full h-auto object-contain rounded" />
                                </div>
                            }
                        })
                    })
            }}
        </WindowHost>
    }
}

#[component]
pub(super) fn ResumeWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let source = create_memo(move |_| {
        runtime.windows.with(|state| {
            resume_source(state.get(WindowKey::Resume).and_then(|w| w.data.as_ref()))
        })
    });
    let download = view! {
        <a href=move || source.get() download="" class="download" title="Download resume">
            "Download"
        </a>
    }
    .into_view();

    view! {
        <WindowHost target=WindowKey::Resume title="Resume.pdf" header_extra=download>
            <object class="resume-document" data=move || source.get() type="application/pdf">
                <a href=move || source.get()>"Open the resume"</a>
            </object>
        </WindowHost>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::content::ContentCatalog;

    #[test]
    fn missing_or_foreign_payload_renders_nothing() {
        assert_eq!(decode_file_payload(None), None);
        assert_eq!(decode_file_payload(Some(&json!({ "unexpected": true }))), None);

        let catalog = ContentCatalog::builtin().expect("catalog");
        let folder = serde_json::to_value(ContentNode::Folder(catalog.default_location().clone()))
            .expect("encode folder");
        assert_eq!(decode_file_payload(Some(&folder)), None);
    }

    #[test]
    fn resume_prefers_payload_href() {
        let payload = json!({
            "kind": "file",
            "id": 1,
            "name": "Resume.pdf",
            "icon": "/images/pdf.png",
            "file_type": "document",
            "href": "files/cv-2026.pdf"
        });

        assert_eq!(resume_source(Some(&payload)), "files/cv-2026.pdf");
        assert_eq!(resume_source(None), DEFAULT_RESUME_PATH);
    }
}
