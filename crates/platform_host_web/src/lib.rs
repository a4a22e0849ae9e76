//! HTTP implementations of [`platform_host`] service contracts.
//!
//! `reqwest` drives both the browser (`wasm32`, via `fetch`) and native builds, so the same
//! adapters serve the shell and integration harnesses.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod execution;
pub mod files;
mod http;

pub use adapters::{build_host_services, selected_host_strategy};
pub use execution::HttpExecutionService;
pub use files::HttpFileStore;
