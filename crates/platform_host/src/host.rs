//! Shared host-bundle models for runtime composition.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{ExecutionService, FileStoreService, NoopExecutionService, NoopFileStore};

/// Base URL of the deployed file store.
pub const DEFAULT_FILE_STORE_URL: &str = "https://useless2-0.onrender.com";
/// Base URL of the interpreter service.
pub const DEFAULT_EXECUTION_URL: &str = "http://127.0.0.1:8000";

/// Stable host strategy selected for the current composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Services reached over HTTP.
    Remote,
    /// In-process adapters (tests, demos).
    InProcess,
    /// Placeholder adapters that fail every call.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::InProcess => "in-process",
            Self::Stub => "stub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Network addresses of the two remote services.
pub struct RemoteEndpoints {
    /// Base URL of the file store (no trailing slash required).
    pub file_store_url: String,
    /// Base URL of the execution service.
    pub execution_url: String,
}

impl Default for RemoteEndpoints {
    fn default() -> Self {
        Self {
            file_store_url: DEFAULT_FILE_STORE_URL.to_string(),
            execution_url: DEFAULT_EXECUTION_URL.to_string(),
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Adapter selection happens before this bundle crosses into `desktop_runtime`, which keeps the
/// runtime decoupled from transport details.
#[derive(Clone)]
pub struct HostServices {
    /// Remote file store.
    pub files: Rc<dyn FileStoreService>,
    /// Remote script execution.
    pub execution: Rc<dyn ExecutionService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles in-process adapters.
    pub fn in_process(
        files: Rc<dyn FileStoreService>,
        execution: Rc<dyn ExecutionService>,
    ) -> Self {
        Self {
            files,
            execution,
            host_strategy: HostStrategy::InProcess,
        }
    }

    /// Bundles adapters that fail every call as unavailable.
    pub fn stub() -> Self {
        Self {
            files: Rc::new(NoopFileStore),
            execution: Rc::new(NoopExecutionService),
            host_strategy: HostStrategy::Stub,
        }
    }
}
