//! HTTP adapter for the remote file store.

use platform_host::{
    CreateFileRequest, CreateFileResponse, FileDocument, FileId, FileStoreFuture,
    FileStoreService, FileSummary, RenameFileRequest, SaveFileRequest, StoreError,
};
use reqwest::Client;

use crate::http::{endpoint, send, send_json};

#[derive(Debug, Clone)]
/// [`FileStoreService`] backed by the JSON file-store API.
pub struct HttpFileStore {
    client: Client,
    base_url: String,
}

impl HttpFileStore {
    /// Creates an adapter rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates an adapter sharing an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn file_url(&self, id: &FileId) -> String {
        endpoint(&self.base_url, &format!("files/{id}"))
    }
}

impl FileStoreService for HttpFileStore {
    fn list_files<'a>(
        &'a self,
        session_id: &'a str,
    ) -> FileStoreFuture<'a, Result<Vec<FileSummary>, StoreError>> {
        Box::pin(async move {
            let request = self
                .client
                .get(endpoint(&self.base_url, "files"))
                .query(&[("session_id", session_id)]);
            send_json(request, None).await
        })
    }

    fn fetch_file<'a>(
        &'a self,
        id: &'a FileId,
    ) -> FileStoreFuture<'a, Result<FileDocument, StoreError>> {
        Box::pin(async move {
            send_json(self.client.get(self.file_url(id)), Some(id.as_str())).await
        })
    }

    fn create_file<'a>(
        &'a self,
        request: &'a CreateFileRequest,
    ) -> FileStoreFuture<'a, Result<FileId, StoreError>> {
        Box::pin(async move {
            let builder = self
                .client
                .post(endpoint(&self.base_url, "files/create"))
                .json(request);
            let created: CreateFileResponse = send_json(builder, None).await?;
            if created.id.as_str().is_empty() {
                return Err(StoreError::Decode("create response is missing the file id".into()));
            }
            Ok(created.id)
        })
    }

    fn save_file<'a>(
        &'a self,
        id: &'a FileId,
        request: &'a SaveFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            send(
                self.client.put(self.file_url(id)).json(request),
                Some(id.as_str()),
            )
            .await
            .map(|_| ())
        })
    }

    fn rename_file<'a>(
        &'a self,
        id: &'a FileId,
        request: &'a RenameFileRequest,
    ) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let url = endpoint(&self.base_url, &format!("files/{id}/rename"));
            send(self.client.patch(url).json(request), Some(id.as_str()))
                .await
                .map(|_| ())
        })
    }

    fn delete_file<'a>(&'a self, id: &'a FileId) -> FileStoreFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            send(self.client.delete(self.file_url(id)), Some(id.as_str()))
                .await
                .map(|_| ())
        })
    }
}
