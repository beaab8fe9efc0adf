use std::path::Path;

use crate::app::FileReader;

#[derive(Clone, Copy, Debug, Default)]
pub struct HostFileReader;

#[async_trait::async_trait]
impl FileReader for HostFileReader {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}
