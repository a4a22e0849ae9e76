//! File-store data types shared across host contracts and implementations.
//!
//! Field names on the wire follow the remote store (`filename`), while the Rust side uses `name`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Server-assigned file identifier. Never generated locally.
pub struct FileId(pub String);

impl FileId {
    /// Wraps a server-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One row of a directory listing.
pub struct FileSummary {
    /// Server-assigned id.
    pub id: FileId,
    /// Display name.
    #[serde(rename = "filename")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A file with its full content, as returned by a fetch.
pub struct FileDocument {
    /// Server-assigned id.
    pub id: FileId,
    /// Display name.
    #[serde(rename = "filename")]
    pub name: String,
    /// Script text.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of a create request.
pub struct CreateFileRequest {
    /// Display name for the new file.
    pub filename: String,
    /// Initial content.
    pub content: String,
    /// Owning session token.
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body returned by a successful create.
pub struct CreateFileResponse {
    /// Id assigned by the store.
    pub id: FileId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of a save (full replace) request.
pub struct SaveFileRequest {
    /// Name sent alongside the content.
    pub filename: String,
    /// Replacement content.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of a rename request.
pub struct RenameFileRequest {
    /// New display name.
    pub filename: String,
}
