use img2mesh::web::server::{build_router, AppState};
use img2mesh::{CliConfig, LocalStorage};
use std::sync::Arc;
use tempfile::TempDir;

fn test_config(media_root: &str, max_upload_mb: usize) -> CliConfig {
    CliConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        media_root: media_root.to_string(),
        max_upload_mb,
        allowed_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
        config: None,
        verbose: false,
    }
}

async fn spawn_app(media_root: &str, max_upload_mb: usize) -> String {
    let config = test_config(media_root, max_upload_mb);
    let storage = LocalStorage::new(media_root);
    let state = AppState::new(storage, Arc::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
    let mut bytes = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut bytes);
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn image_part(bytes: Vec<u8>, file_name: &str) -> reqwest::multipart::Part {
    reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str("image/png")
        .unwrap()
}

#[tokio::test]
async fn test_get_root_serves_upload_form() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = spawn_app(temp_dir.path().to_str().unwrap(), 10).await;

    let response = reqwest::get(&base_url).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("<form action=\"/upload\""));
    assert!(body.contains("name=\"image\""));
    assert!(body.contains("enctype=\"multipart/form-data\""));
}

#[tokio::test]
async fn test_post_valid_image_saves_file_and_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let media_root = temp_dir.path().to_str().unwrap().to_string();
    let base_url = spawn_app(&media_root, 10).await;

    let bytes = png_bytes();
    let form = reqwest::multipart::Form::new().part("image", image_part(bytes.clone(), "photo.png"));

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);

    let expected_path = format!("{}/uploads/photo.png", media_root);
    let body = response.text().await.unwrap();
    assert_eq!(body, format!("File uploaded to: {}", expected_path));

    let saved = std::fs::read(temp_dir.path().join("uploads/photo.png")).unwrap();
    assert_eq!(saved, bytes);
}

#[tokio::test]
async fn test_post_without_image_field_returns_failure_text() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = spawn_app(temp_dir.path().to_str().unwrap(), 10).await;

    let form = reqwest::multipart::Form::new().text("comment", "no file here");

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Failed to upload file");
}

#[tokio::test]
async fn test_post_disallowed_extension_returns_failure_text() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = spawn_app(temp_dir.path().to_str().unwrap(), 10).await;

    let form =
        reqwest::multipart::Form::new().part("image", image_part(png_bytes(), "script.sh"));

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Failed to upload file");
    assert!(!temp_dir.path().join("uploads/script.sh").exists());
}

#[tokio::test]
async fn test_post_empty_file_returns_failure_text() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = spawn_app(temp_dir.path().to_str().unwrap(), 10).await;

    let form = reqwest::multipart::Form::new().part("image", image_part(Vec::new(), "photo.png"));

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Failed to upload file");
}

#[tokio::test]
async fn test_upload_body_limit_is_enforced() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = spawn_app(temp_dir.path().to_str().unwrap(), 1).await;

    // 2 MB of zeroes against a 1 MB limit
    let form =
        reqwest::multipart::Form::new().part("image", image_part(vec![0; 2 * 1024 * 1024], "big.png"));

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 413);
    assert!(!temp_dir.path().join("uploads/big.png").exists());
}

#[tokio::test]
async fn test_get_on_upload_route_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let base_url = spawn_app(temp_dir.path().to_str().unwrap(), 10).await;

    let response = reqwest::get(format!("{}/upload", base_url)).await.unwrap();
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_upload_file_name_is_sanitized_to_final_component() {
    let temp_dir = TempDir::new().unwrap();
    let media_root = temp_dir.path().to_str().unwrap().to_string();
    let base_url = spawn_app(&media_root, 10).await;

    let form = reqwest::multipart::Form::new()
        .part("image", image_part(png_bytes(), "../escape.png"));

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(temp_dir.path().join("uploads/escape.png").exists());
    assert!(!temp_dir.path().parent().unwrap().join("escape.png").exists());
}
