//! Typed host-domain contracts and shared models used by the desktop runtime and its adapters.
//!
//! This crate is the API-first boundary for remote services. It exposes the file-store and
//! execution contracts, their wire models, the per-shell session token, and in-process adapters,
//! while HTTP transport lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod execution;
pub mod files;
pub mod host;
pub mod session;

pub use error::StoreError;
pub use execution::{
    ExecutionFuture, ExecutionService, NoopExecutionService, RunRequest, RunResponse,
};
pub use files::service::{
    FileStoreCall, FileStoreFuture, FileStoreService, MemoryFileStore, NoopFileStore,
};
pub use files::types::{
    CreateFileRequest, CreateFileResponse, FileDocument, FileId, FileSummary, RenameFileRequest,
    SaveFileRequest,
};
pub use host::{
    HostServices, HostStrategy, RemoteEndpoints, DEFAULT_EXECUTION_URL, DEFAULT_FILE_STORE_URL,
};
pub use session::{shell_session, SessionContext};
