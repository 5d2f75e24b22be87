use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn media_root(&self) -> &str;
    fn max_upload_bytes(&self) -> usize;
    fn allowed_extensions(&self) -> &[String];
}
