//! Remote file-store service contracts and in-process adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use super::types::{
    CreateFileRequest, FileDocument, FileId, FileSummary, RenameFileRequest, SaveFileRequest,
};
use crate::error::StoreError;

/// Object-safe boxed future used by [`FileStoreService`] async methods.
pub type FileStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for CRUD against the session-scoped remote file store.
///
/// Implementations never mutate caller state; every call is a single request/response.
pub trait FileStoreService {
    /// Lists the files owned by `session_id`.
    fn list_files<'a>(
        &'a self,
        session_id: &'a str,
    ) -> FileStoreFuture<'a, Result<Vec<FileSummary>, StoreError>>;

    /// Fetches one file including its content.
    fn fetch_file<'a>(
        &'a self,
        id: &'a FileId,
    ) -> FileStoreFuture<'a, Result<FileDocument, StoreError>>;

    /// Creates a file and returns the id assigned by the store.
    fn create_file<'a>(
        &'a self,
        request: &'a CreateFileRequest,
    ) -> FileStoreFuture<'a, Result<FileId, StoreError>>;

    /// Replaces the name and content of an existing file.
    fn save_file<'a>(
        &'a self,
        id: &'a FileId,
        request: &'a SaveFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>>;

    /// Renames an existing file.
    fn rename_file<'a>(
        &'a self,
        id: &'a FileId,
        request: &'a RenameFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>>;

    /// Deletes a file.
    fn delete_file<'a>(&'a self, id: &'a FileId) -> FileStoreFuture<'a, Result<(), StoreError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op file store for unsupported targets; every call fails as unavailable.
pub struct NoopFileStore;

impl FileStoreService for NoopFileStore {
    fn list_files<'a>(
        &'a self,
        _session_id: &'a str,
    ) -> FileStoreFuture<'a, Result<Vec<FileSummary>, StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("file store")) })
    }

    fn fetch_file<'a>(
        &'a self,
        _id: &'a FileId,
    ) -> FileStoreFuture<'a, Result<FileDocument, StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("file store")) })
    }

    fn create_file<'a>(
        &'a self,
        _request: &'a CreateFileRequest,
    ) -> FileStoreFuture<'a, Result<FileId, StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("file store")) })
    }

    fn save_file<'a>(
        &'a self,
        _id: &'a FileId,
        _request: &'a SaveFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("file store")) })
    }

    fn rename_file<'a>(
        &'a self,
        _id: &'a FileId,
        _request: &'a RenameFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("file store")) })
    }

    fn delete_file<'a>(&'a self, _id: &'a FileId) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async { Err(StoreError::Unavailable("file store")) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One request observed by [`MemoryFileStore`], in arrival order.
pub enum FileStoreCall {
    /// `list_files` for a session.
    List(String),
    /// `fetch_file`.
    Fetch(FileId),
    /// `create_file` with the requested name.
    Create(String),
    /// `save_file`.
    Save(FileId),
    /// `rename_file` with the new name.
    Rename(FileId, String),
    /// `delete_file`.
    Delete(FileId),
}

#[derive(Debug, Clone)]
struct StoredFile {
    session_id: String,
    id: FileId,
    name: String,
    content: String,
}

#[derive(Debug, Default)]
struct MemoryFiles {
    next_id: u64,
    files: Vec<StoredFile>,
    calls: Vec<FileStoreCall>,
}

impl MemoryFiles {
    fn find(&self, id: &FileId) -> Result<&StoredFile, StoreError> {
        self.files
            .iter()
            .find(|file| &file.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn find_mut(&mut self, id: &FileId) -> Result<&mut StoredFile, StoreError> {
        self.files
            .iter_mut()
            .find(|file| &file.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[derive(Debug, Clone)]
/// In-memory file store that behaves like the remote service and records every request.
///
/// Ids are decimal counters starting at `1` unless [`MemoryFileStore::starting_at`] is used.
pub struct MemoryFileStore {
    inner: Rc<RefCell<MemoryFiles>>,
}

impl Default for MemoryFileStore {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl MemoryFileStore {
    /// Creates an empty store whose first assigned id is `first_id`.
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryFiles {
                next_id: first_id,
                ..MemoryFiles::default()
            })),
        }
    }

    /// Seeds a file directly, bypassing the request log. Returns its id.
    pub fn seed(&self, session_id: &str, name: &str, content: &str) -> FileId {
        let mut inner = self.inner.borrow_mut();
        let id = FileId(inner.next_id.to_string());
        inner.next_id += 1;
        inner.files.push(StoredFile {
            session_id: session_id.to_string(),
            id: id.clone(),
            name: name.to_string(),
            content: content.to_string(),
        });
        id
    }

    /// Returns every request received so far.
    pub fn calls(&self) -> Vec<FileStoreCall> {
        self.inner.borrow().calls.clone()
    }

    /// Returns how many times `id` was fetched.
    pub fn fetch_count(&self, id: &FileId) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|call| matches!(call, FileStoreCall::Fetch(fetched) if fetched == id))
            .count()
    }

    /// Returns the stored `(name, content)` for `id`, if present.
    pub fn stored(&self, id: &FileId) -> Option<(String, String)> {
        self.inner
            .borrow()
            .find(id)
            .ok()
            .map(|file| (file.name.clone(), file.content.clone()))
    }

    /// Removes a file without recording a request, as another client would.
    pub fn remove_externally(&self, id: &FileId) {
        self.inner.borrow_mut().files.retain(|file| &file.id != id);
    }

    fn record(&self, call: FileStoreCall) {
        self.inner.borrow_mut().calls.push(call);
    }
}

impl FileStoreService for MemoryFileStore {
    fn list_files<'a>(
        &'a self,
        session_id: &'a str,
    ) -> FileStoreFuture<'a, Result<Vec<FileSummary>, StoreError>> {
        Box::pin(async move {
            self.record(FileStoreCall::List(session_id.to_string()));
            Ok(self
                .inner
                .borrow()
                .files
                .iter()
                .filter(|file| file.session_id == session_id)
                .map(|file| FileSummary {
                    id: file.id.clone(),
                    name: file.name.clone(),
                })
                .collect())
        })
    }

    fn fetch_file<'a>(
        &'a self,
        id: &'a FileId,
    ) -> FileStoreFuture<'a, Result<FileDocument, StoreError>> {
        Box::pin(async move {
            self.record(FileStoreCall::Fetch(id.clone()));
            let inner = self.inner.borrow();
            let file = inner.find(id)?;
            Ok(FileDocument {
                id: file.id.clone(),
                name: file.name.clone(),
                content: file.content.clone(),
            })
        })
    }

    fn create_file<'a>(
        &'a self,
        request: &'a CreateFileRequest,
    ) -> FileStoreFuture<'a, Result<FileId, StoreError>> {
        Box::pin(async move {
            self.record(FileStoreCall::Create(request.filename.clone()));
            Ok(self.seed(&request.session_id, &request.filename, &request.content))
        })
    }

    fn save_file<'a>(
        &'a self,
        id: &'a FileId,
        request: &'a SaveFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.record(FileStoreCall::Save(id.clone()));
            let mut inner = self.inner.borrow_mut();
            let file = inner.find_mut(id)?;
            file.name = request.filename.clone();
            file.content = request.content.clone();
            Ok(())
        })
    }

    fn rename_file<'a>(
        &'a self,
        id: &'a FileId,
        request: &'a RenameFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.record(FileStoreCall::Rename(id.clone(), request.filename.clone()));
            self.inner.borrow_mut().find_mut(id)?.name = request.filename.clone();
            Ok(())
        })
    }

    fn delete_file<'a>(&'a self, id: &'a FileId) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.record(FileStoreCall::Delete(id.clone()));
            let mut inner = self.inner.borrow_mut();
            inner.find(id)?;
            inner.files.retain(|file| &file.id != id);
            Ok(())
        })
    }
}
