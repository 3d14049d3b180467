use crate::sbom_generation::domain::Checksum;
use crate::shared::Result;
use std::path::Path;

/// ChecksumCalculator port for module digests
pub trait ChecksumCalculator {
    /// Computes the checksum for a module reference
    ///
    /// # Arguments
    /// * `project_path` - Project directory the reference is relative to
    /// * `reference` - Module-specific reference (a path or an artifact id)
    fn checksum(&self, project_path: &Path, reference: &str) -> Result<Checksum>;
}
