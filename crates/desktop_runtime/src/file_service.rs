//! Remote half of the session file directory.
//!
//! [`FileDirectoryService`] issues file-store requests scoped to one session and classifies
//! failures. It never touches desktop state: callers apply results through reducer actions while
//! holding the file's [`FileTurn`], so an operation's request and its state update finish before
//! the next operation on that file starts.

use std::future::Future;
use std::rc::Rc;

use platform_host::{
    CreateFileRequest, FileDocument, FileId, FileStoreService, FileSummary, RenameFileRequest,
    SaveFileRequest, SessionContext, StoreError,
};
use thiserror::Error;

use crate::directory::FileRecord;
use crate::file_queue::{FileOperationQueue, FileTurn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure of one directory operation.
pub enum DirectoryError {
    /// Input rejected before any request was issued.
    #[error("{0}")]
    Validation(&'static str),
    /// Transport failure, unexpected status or undecodable body.
    #[error(transparent)]
    Network(StoreError),
    /// The store no longer has the file.
    #[error("file {0} no longer exists")]
    Referential(FileId),
}

impl DirectoryError {
    fn for_file(file_id: &FileId, err: StoreError) -> Self {
        if err.is_not_found() {
            Self::Referential(file_id.clone())
        } else {
            Self::Network(err)
        }
    }

    /// Returns the id to evict locally when the store reported it missing.
    pub fn missing_file(&self) -> Option<&FileId> {
        match self {
            Self::Referential(file_id) => Some(file_id),
            Self::Validation(_) | Self::Network(_) => None,
        }
    }
}

impl From<StoreError> for DirectoryError {
    fn from(err: StoreError) -> Self {
        Self::Network(err)
    }
}

/// Validation message for blank file names.
pub const EMPTY_NAME: &str = "File name cannot be empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Directory operations, used to label logs and failure messages.
pub enum FileOperation {
    List,
    Create,
    Open,
    Save,
    Rename,
    Delete,
}

impl FileOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Open => "open",
            Self::Save => "save",
            Self::Rename => "rename",
            Self::Delete => "delete",
        }
    }

    /// Second line of the status message shown when the operation fails.
    pub fn failure_hint(self) -> &'static str {
        match self {
            Self::List => "Could not load files from the backend.",
            Self::Create => "Could not create the new file.",
            Self::Open => "Could not open the file.",
            Self::Save => "Could not save the file.",
            Self::Rename => "Could not rename the file.",
            Self::Delete => "Could not delete the file.",
        }
    }
}

/// Trims `name` and rejects blank input.
pub fn validate_file_name(name: &str) -> Result<String, DirectoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::Validation(EMPTY_NAME));
    }
    Ok(trimmed.to_string())
}

#[derive(Clone)]
/// Session-scoped client for the remote file store.
pub struct FileDirectoryService {
    store: Rc<dyn FileStoreService>,
    session: SessionContext,
    default_content: Rc<str>,
    queue: FileOperationQueue,
}

impl FileDirectoryService {
    pub fn new(
        store: Rc<dyn FileStoreService>,
        session: SessionContext,
        default_content: impl Into<String>,
    ) -> Self {
        Self {
            store,
            session,
            default_content: Rc::from(default_content.into()),
            queue: FileOperationQueue::default(),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn default_content(&self) -> &str {
        &self.default_content
    }

    pub fn queue(&self) -> &FileOperationQueue {
        &self.queue
    }

    /// Waits for exclusive access to `file_id`; see [`FileOperationQueue::acquire`].
    pub fn turn(&self, file_id: &FileId) -> impl Future<Output = FileTurn> + 'static {
        self.queue.acquire(file_id)
    }

    /// Lists the session's files in store order.
    pub async fn list(&self) -> Result<Vec<FileSummary>, DirectoryError> {
        Ok(self.store.list_files(self.session.token()).await?)
    }

    /// Creates a file holding the default content. Blank names fail without a request.
    pub async fn create(&self, name: &str) -> Result<FileRecord, DirectoryError> {
        let filename = validate_file_name(name)?;
        let request = CreateFileRequest {
            filename,
            content: self.default_content.to_string(),
            session_id: self.session.token().to_string(),
        };
        let id = self.store.create_file(&request).await?;
        Ok(FileRecord {
            id,
            name: request.filename,
            content: Some(request.content),
        })
    }

    /// Fetches full content for a file about to be shown in a new editor.
    pub async fn fetch(&self, file_id: &FileId) -> Result<FileDocument, DirectoryError> {
        self.store
            .fetch_file(file_id)
            .await
            .map_err(|err| DirectoryError::for_file(file_id, err))
    }

    /// Replaces name and content of a stored file.
    pub async fn save(
        &self,
        file_id: &FileId,
        name: &str,
        content: &str,
    ) -> Result<(), DirectoryError> {
        let request = SaveFileRequest {
            filename: name.to_string(),
            content: content.to_string(),
        };
        self.store
            .save_file(file_id, &request)
            .await
            .map_err(|err| DirectoryError::for_file(file_id, err))
    }

    /// Renames a stored file and returns the name that was accepted.
    pub async fn rename(&self, file_id: &FileId, name: &str) -> Result<String, DirectoryError> {
        let request = RenameFileRequest {
            filename: validate_file_name(name)?,
        };
        self.store
            .rename_file(file_id, &request)
            .await
            .map_err(|err| DirectoryError::for_file(file_id, err))?;
        Ok(request.filename)
    }

    pub async fn delete(&self, file_id: &FileId) -> Result<(), DirectoryError> {
        self.store
            .delete_file(file_id)
            .await
            .map_err(|err| DirectoryError::for_file(file_id, err))
    }
}
