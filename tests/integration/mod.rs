// Integration test utilities and common code
#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture holding a clippings export and an output directory in a temp dir
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a clippings export with given content
    pub fn create_clippings_file(&self, content: &str) -> PathBuf {
        let file_path = self.root_path.join("My Clippings.txt");
        fs::write(&file_path, content).expect("Failed to write clippings file");
        file_path
    }

    /// Default output directory for this fixture
    pub fn output_dir(&self) -> PathBuf {
        self.root_path.join("output")
    }

    pub fn read_output<P: AsRef<Path>>(&self, relative_path: P) -> String {
        let path = self.output_dir().join(relative_path);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// All files under the output directory, relative and sorted
    pub fn output_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        collect_files(&self.output_dir(), &self.output_dir(), &mut files);
        files.sort();
        files
    }
}

fn collect_files(base: &Path, dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("Failed to read output directory") {
        let path = entry.expect("Failed to read directory entry").path();
        if path.is_dir() {
            collect_files(base, &path, files);
        } else {
            files.push(path.strip_prefix(base).unwrap().to_path_buf());
        }
    }
}

/// Build one CRLF record in the device's export format
pub fn clipping_record(title: &str, page: u32, text: &str) -> String {
    format!(
        "{title}\r\n- Your Highlight on page {page} | Location {} | Added on Sunday, 7 April 2019 21:10:14\r\n\r\n{text}\r\n==========\r\n",
        page * 15
    )
}
