use crate::ports::outbound::ManifestReader;
use crate::sbom_generation::domain::PomProject;
use crate::shared::error::SbomError;
use crate::shared::security::read_checked_to_string;
use crate::shared::Result;
use std::path::Path;

/// File name of the Maven build descriptor
pub const MANIFEST_FILE_NAME: &str = "pom.xml";

/// FileSystemReader adapter for reading the build descriptor from disk
///
/// Reads go through the shared security checks (no symlinks, regular files
/// only, bounded size) before the XML is deserialized.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Deserializes descriptor text into the typed project model
    pub fn parse_manifest(content: &str) -> std::result::Result<PomProject, quick_xml::DeError> {
        quick_xml::de::from_str(content)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<PomProject> {
        let manifest_path = project_path.join(MANIFEST_FILE_NAME);

        if !manifest_path.exists() {
            return Err(SbomError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "pom.xml does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a Maven project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_checked_to_string(&manifest_path, MANIFEST_FILE_NAME).map_err(|e| {
            SbomError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        Self::parse_manifest(&content).map_err(|e| {
            SbomError::ManifestParseError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
