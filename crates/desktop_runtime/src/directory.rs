//! Session-scoped file metadata cache backing the desktop icons.
//!
//! Entries change only after the remote store acknowledges an operation; see
//! [`crate::file_service::FileDirectoryService`] for the remote half.

use platform_host::{FileDocument, FileId, FileSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One stored file as known locally.
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    /// `None` until the file is opened in an editor (or created locally with known content).
    pub content: Option<String>,
}

impl From<FileSummary> for FileRecord {
    fn from(summary: FileSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Ordered file cache; order is the icon order on the desktop.
///
/// `revision` advances on every acknowledged create, rename or delete. A listing requested at an
/// older revision may predate one of those and must not replace the cache.
pub struct FileDirectory {
    entries: Vec<FileRecord>,
    revision: u64,
}

impl FileDirectory {
    pub fn entries(&self) -> &[FileRecord] {
        &self.entries
    }

    pub fn get(&self, file_id: &FileId) -> Option<&FileRecord> {
        self.entries.iter().find(|entry| &entry.id == file_id)
    }

    pub fn contains(&self, file_id: &FileId) -> bool {
        self.get(file_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Replaces the whole cache with a fresh listing.
    pub fn replace_all(&mut self, listing: Vec<FileSummary>) {
        self.entries = listing.into_iter().map(FileRecord::from).collect();
    }

    /// Adds a record, replacing any entry with the same id.
    pub fn insert(&mut self, record: FileRecord) {
        match self.entries.iter_mut().find(|entry| entry.id == record.id) {
            Some(existing) => *existing = record,
            None => self.entries.push(record),
        }
        self.bump();
    }

    /// Renames an existing entry. Unknown ids are ignored so a late rename never re-adds a file.
    pub fn rename(&mut self, file_id: &FileId, name: &str) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.id == file_id) {
            Some(entry) => {
                entry.name = name.to_string();
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Stores fetched or saved content for an existing entry.
    pub fn record_content(&mut self, file_id: &FileId, content: &str) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.id == file_id) {
            Some(entry) => {
                entry.content = Some(content.to_string());
                true
            }
            None => false,
        }
    }

    /// Records a fetched document; adds the entry when the listing has not caught up yet.
    pub fn record_document(&mut self, document: &FileDocument) {
        if !self.record_content(&document.id, &document.content) {
            self.entries.push(FileRecord {
                id: document.id.clone(),
                name: document.name.clone(),
                content: Some(document.content.clone()),
            });
            self.bump();
        }
    }

    pub fn remove(&mut self, file_id: &FileId) -> Option<FileRecord> {
        let index = self.entries.iter().position(|entry| &entry.id == file_id)?;
        self.bump();
        Some(self.entries.remove(index))
    }
}
