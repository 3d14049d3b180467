use crate::sbom_generation::domain::LicenseInfo;
use crate::shared::Result;
use std::path::Path;

/// LicenseDetector port for finding the project's own license
pub trait LicenseDetector {
    /// Looks for license text in the project directory
    ///
    /// Returns `Ok(None)` when no license file exists. An error means a file
    /// was found but could not be read.
    fn detect(&self, project_path: &Path) -> Result<Option<LicenseInfo>>;
}
