//! Script execution service contracts.
//!
//! The interpreter runs remotely; the shell only submits source text and reads back the produced
//! output. There is no streaming and no session scoping.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Object-safe boxed future used by [`ExecutionService`].
pub type ExecutionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of a run request.
pub struct RunRequest {
    /// Script source to evaluate.
    #[serde(rename = "mlm_code")]
    pub source_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of a successful run response.
pub struct RunResponse {
    /// Everything the script printed, or the interpreter's error text.
    #[serde(rename = "output")]
    pub output_text: String,
}

/// Host service that evaluates script source remotely.
pub trait ExecutionService {
    /// Submits `source_text` and resolves to the produced output text.
    fn run<'a>(&'a self, source_text: &'a str) -> ExecutionFuture<'a, Result<String, StoreError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op execution service for unsupported targets.
pub struct NoopExecutionService;

impl ExecutionService for NoopExecutionService {
    fn run<'a>(&'a self, _source_text: &'a str) -> ExecutionFuture<'a, Result<String, StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("execution service")) })
    }
}
