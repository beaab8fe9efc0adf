use std::path::Path;

#[async_trait::async_trait]
pub trait FileReader {
    async fn exists(&self, path: &Path) -> bool;
    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}
