use crate::utils::error::{AppError, Result};
use crate::web::server::AppState;
use crate::web::uploads;
use axum::extract::{Multipart, State};
use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Image to 3D</title>
</head>
<body>
    <h1>Upload an image</h1>
    <form action="/upload" method="post" enctype="multipart/form-data">
        <input type="file" name="image" accept="image/*" required>
        <button type="submit">Upload</button>
    </form>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;

        let saved = uploads::save_upload(
            &state.storage,
            state.config.media_root(),
            state.config.allowed_extensions(),
            file_name.as_deref(),
            &data,
        )
        .await?;

        tracing::info!("📁 Stored upload: {} ({} bytes)", saved.path, saved.size_bytes);
        return Ok(format!("File uploaded to: {}", saved.path));
    }

    Err(AppError::ValidationError {
        message: "multipart form has no image field".to_string(),
    })
}
