use crate::sbom_generation::domain::PomProject;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading the build descriptor
///
/// Implementations locate the descriptor inside the project directory and
/// deserialize it; the core never sees raw XML.
pub trait ManifestReader {
    /// Reads and deserializes the project's `pom.xml`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The descriptor does not exist or is not a regular file
    /// - The file cannot be read
    /// - The content is not a well-formed build descriptor
    fn read_manifest(&self, project_path: &Path) -> Result<PomProject>;
}
