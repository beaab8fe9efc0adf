#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use distro_probe::app::{
    CommandOutput, CommandRunError, CommandRunner, DetectionContext, FileReader,
};
use mockall::mock;

/// In-memory filesystem. Clones share contents and counters, so a test can keep
/// a handle after handing one to the detector.
#[derive(Clone, Default)]
pub struct FakeFileReader {
    files: Arc<HashMap<PathBuf, Vec<u8>>>,
    exists_calls: Arc<AtomicUsize>,
    read_calls: Arc<AtomicUsize>,
}

impl FakeFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            files: Arc::new(
                files
                    .into_iter()
                    .map(|(path, contents)| (PathBuf::from(path), contents.as_bytes().to_vec()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FileReader for FakeFileReader {
    async fn exists(&self, path: &Path) -> bool {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.files.contains_key(path)
    }

    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }
}

mock! {
    pub CommandRunner {}
    #[async_trait::async_trait]
    impl CommandRunner for CommandRunner {
        async fn run(
            &self,
            ctx: &DetectionContext,
            program: &str,
            args: &[String],
        ) -> Result<CommandOutput, CommandRunError>;
    }
}

pub fn command_not_found() -> CommandRunError {
    CommandRunError::Spawn(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "No such file or directory (os error 2)",
    ))
}

pub fn lsb_release_stdout(stdout: &str) -> CommandOutput {
    CommandOutput {
        stdout: stdout.to_string(),
        stderr: String::new(),
        exit_code: Some(0),
        succeeded: true,
    }
}
