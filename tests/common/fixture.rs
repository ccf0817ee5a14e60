//! Portfolio documents written to a temporary content directory.

use folio::content::{PERSONAL_INFO_DOC, PROJECTS_DOC, SKILLS_DOC};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PERSONAL_INFO: &str = include_str!("../../data/personal-info.json");
const SKILLS: &str = include_str!("../../data/skills.json");
const PROJECTS: &str = include_str!("../../data/projects.json");

/// A content directory holding the sample documents.
///
/// Removed when dropped.
#[derive(Debug)]
pub struct ContentFixture {
    dir: TempDir,
}

impl ContentFixture {
    /// Write the sample documents.
    pub fn sample() -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(PERSONAL_INFO_DOC), PERSONAL_INFO)?;
        fs::write(dir.path().join(SKILLS_DOC), SKILLS)?;
        fs::write(dir.path().join(PROJECTS_DOC), PROJECTS)?;
        Ok(Self { dir })
    }

    /// Directory to pass as the content source.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrite one document.
    pub fn write(&self, document: &str, contents: &str) -> std::io::Result<()> {
        fs::write(self.dir.path().join(document), contents)
    }

    /// Create a file under the content directory (e.g. a preview image).
    pub fn touch(&self, relative: &str) -> std::io::Result<()> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, b"")
    }
}
