//! Typed host-service contracts shared by the portfolio runtime and its browser adapters.
//!
//! Concrete browser implementations live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
