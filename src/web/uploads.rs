use crate::domain::model::SavedUpload;
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result};
use crate::utils::validation;

/// Subdirectory of the media root that uploads land in.
pub const UPLOAD_DIR: &str = "uploads";

/// Validate an uploaded file and write its bytes under the media root.
///
/// The stored name is the final path component of the client-supplied name;
/// anything resembling a directory prefix is discarded.
pub async fn save_upload<S: Storage>(
    storage: &S,
    media_root: &str,
    allowed_extensions: &[String],
    file_name: Option<&str>,
    data: &[u8],
) -> Result<SavedUpload> {
    let raw_name = file_name.ok_or_else(|| AppError::ValidationError {
        message: "uploaded file has no name".to_string(),
    })?;

    let name = sanitize_file_name(raw_name)?;
    validation::validate_file_extension("image", &name, allowed_extensions)?;

    if data.is_empty() {
        return Err(AppError::ValidationError {
            message: format!("uploaded file '{}' is empty", name),
        });
    }

    let relative_path = format!("{}/{}", UPLOAD_DIR, name);
    storage.write_file(&relative_path, data).await?;

    let path = format!("{}/{}", media_root.trim_end_matches('/'), relative_path);
    Ok(SavedUpload {
        file_name: name,
        path,
        size_bytes: data.len() as u64,
    })
}

/// Reduce a client-supplied file name to its final path component.
fn sanitize_file_name(raw: &str) -> Result<String> {
    // Browsers may send full paths; both separators show up in the wild.
    let candidate = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();

    if candidate.is_empty() || candidate == "." || candidate == ".." {
        return Err(AppError::ValidationError {
            message: format!("invalid file name: '{}'", raw),
        });
    }

    Ok(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    #[async_trait]
    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AppError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn allowed() -> Vec<String> {
        vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
    }

    #[tokio::test]
    async fn test_save_upload_writes_under_uploads_dir() {
        let storage = MockStorage::new();

        let saved = save_upload(&storage, "./media", &allowed(), Some("photo.png"), b"pixels")
            .await
            .unwrap();

        assert_eq!(saved.file_name, "photo.png");
        assert_eq!(saved.path, "./media/uploads/photo.png");
        assert_eq!(saved.size_bytes, 6);
        assert_eq!(
            storage.get_file("uploads/photo.png").await.unwrap(),
            b"pixels"
        );
    }

    #[tokio::test]
    async fn test_save_upload_strips_directory_components() {
        let storage = MockStorage::new();

        let saved = save_upload(
            &storage,
            "./media",
            &allowed(),
            Some("../../etc/secret.png"),
            b"pixels",
        )
        .await
        .unwrap();

        assert_eq!(saved.file_name, "secret.png");
        assert!(storage.get_file("uploads/secret.png").await.is_some());
    }

    #[tokio::test]
    async fn test_save_upload_strips_windows_style_paths() {
        let storage = MockStorage::new();

        let saved = save_upload(
            &storage,
            "./media",
            &allowed(),
            Some(r"C:\Users\me\photo.jpg"),
            b"pixels",
        )
        .await
        .unwrap();

        assert_eq!(saved.file_name, "photo.jpg");
    }

    #[tokio::test]
    async fn test_save_upload_rejects_missing_name() {
        let storage = MockStorage::new();
        let result = save_upload(&storage, "./media", &allowed(), None, b"pixels").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_save_upload_rejects_disallowed_extension() {
        let storage = MockStorage::new();
        let result =
            save_upload(&storage, "./media", &allowed(), Some("notes.txt"), b"text").await;
        assert!(result.is_err());
        assert!(storage.get_file("uploads/notes.txt").await.is_none());
    }

    #[tokio::test]
    async fn test_save_upload_rejects_empty_body() {
        let storage = MockStorage::new();
        let result = save_upload(&storage, "./media", &allowed(), Some("photo.png"), b"").await;
        assert!(result.is_err());
    }
}
