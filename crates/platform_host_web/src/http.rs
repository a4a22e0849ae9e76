//! Shared request/response plumbing for the HTTP adapters.

use platform_host::StoreError;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Joins a configured base URL and an absolute endpoint path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Maps a response status onto the store error taxonomy.
///
/// `target` names the addressed record; when present a `404` becomes [`StoreError::NotFound`].
pub(crate) fn classify_status(status: u16, target: Option<&str>) -> Result<(), StoreError> {
    match (status, target) {
        (200..=299, _) => Ok(()),
        (404, Some(target)) => Err(StoreError::NotFound(target.to_string())),
        (status, _) => Err(StoreError::Status { status }),
    }
}

/// Sends `request` and checks the status, returning the response for body decoding.
pub(crate) async fn send(
    request: RequestBuilder,
    target: Option<&str>,
) -> Result<Response, StoreError> {
    let response = request
        .send()
        .await
        .map_err(|err| StoreError::Network(err.to_string()))?;
    classify_status(response.status().as_u16(), target)?;
    Ok(response)
}

/// Sends `request` and decodes a JSON body on success.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    target: Option<&str>,
) -> Result<T, StoreError> {
    send(request, target)
        .await?
        .json::<T>()
        .await
        .map_err(|err| StoreError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        assert_eq!(
            endpoint("https://files.example/", "/files/create"),
            "https://files.example/files/create"
        );
        assert_eq!(endpoint("http://127.0.0.1:8000", "run"), "http://127.0.0.1:8000/run");
    }

    #[test]
    fn not_found_is_referential_only_for_addressed_requests() {
        assert_eq!(classify_status(204, Some("7")), Ok(()));
        assert_eq!(
            classify_status(404, Some("7")),
            Err(StoreError::NotFound("7".to_string()))
        );
        assert_eq!(
            classify_status(404, None),
            Err(StoreError::Status { status: 404 })
        );
        assert_eq!(
            classify_status(500, Some("7")),
            Err(StoreError::Status { status: 500 })
        );
    }
}
