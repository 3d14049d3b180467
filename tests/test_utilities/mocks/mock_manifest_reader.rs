use std::path::Path;
use mvn_sbom::prelude::*;

/// Mock ManifestReader parsing an in-memory pom.xml
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _project_path: &Path) -> Result<PomProject> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(FileSystemReader::parse_manifest(&self.content)?)
    }
}
