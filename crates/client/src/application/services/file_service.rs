//! File service - avatar uploads and image URLs

use authortools_domain::FileId;

use crate::application::api::Api;
use crate::application::dto::UploadedFile;
use crate::application::ServiceError;
use crate::ports::outbound::MultipartFile;

const FILE_PATH: &str = "/file";

#[derive(Clone)]
pub struct FileService {
    api: Api,
    base_url: String,
}

impl FileService {
    /// `base_url` is the API root used to build public image URLs
    pub fn new(api: Api, base_url: &str) -> Self {
        Self {
            api,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Upload a file and return the id the server assigned to it
    pub async fn upload(&self, file: MultipartFile) -> Result<FileId, ServiceError> {
        tracing::debug!(file_name = %file.file_name, size = file.bytes.len(), "Uploading file");
        let uploaded: UploadedFile = self.api.upload(FILE_PATH, file).await?;
        Ok(uploaded.id)
    }

    /// URL under which an uploaded image is served
    pub fn image_url(&self, file_id: &FileId) -> String {
        format!("{}{}/{}", self.base_url, FILE_PATH, file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use std::sync::Arc;

    #[test]
    fn image_url_joins_base_and_id() {
        let service = FileService::new(
            Api::new(Arc::new(MockRawApiPort::new())),
            "https://api.example.com/api/",
        );

        assert_eq!(
            service.image_url(&FileId::from("f1")),
            "https://api.example.com/api/file/f1"
        );
    }

    #[tokio::test]
    async fn upload_returns_server_file_id() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_multipart()
            .withf(|path, file| path == "/file" && file.file_name == "ada.png")
            .times(1)
            .returning(|_, _| Ok(serde_json::json!({ "id": "f42" })));

        let service = FileService::new(Api::new(Arc::new(raw)), "http://localhost/api");
        let id = service
            .upload(MultipartFile {
                file_name: "ada.png".into(),
                content_type: "image/png".into(),
                bytes: vec![0x89, 0x50],
            })
            .await
            .unwrap();

        assert_eq!(id, FileId::from("f42"));
    }
}
