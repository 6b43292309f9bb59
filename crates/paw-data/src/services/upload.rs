//! Image upload endpoint.

use crate::{ApiClient, ApiError, MultipartForm};
use serde::Deserialize;

/// Upload response carrying the public URL of the stored file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
}

/// File upload service.
pub struct UploadService {
    client: ApiClient,
}

impl UploadService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload an image and return its public URL.
    pub fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, ApiError> {
        let form = MultipartForm::new().file("file", filename, content_type, data);
        let response: UploadResponse = self
            .client
            .post("/uploads")
            .multipart(form)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.url)
    }
}
