use crate::ports::outbound::LicenseDetector;
use crate::sbom_generation::domain::LicenseInfo;
use crate::sbom_generation::policies::LicensePolicy;
use crate::shared::security::read_checked_to_string;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// License file names, in lookup order, compared case-insensitively
const LICENSE_FILE_NAMES: [&str; 4] = ["license", "license.txt", "license.md", "copying"];

/// LicenseFileDetector adapter finding the project license on disk
///
/// The first matching file in the project directory is read and its SPDX
/// id identified from marker phrases. Text that matches no known license is
/// still returned, with a comment saying so.
pub struct LicenseFileDetector;

impl LicenseFileDetector {
    pub fn new() -> Self {
        Self
    }

    fn find_license_file(project_path: &Path) -> Result<Option<PathBuf>> {
        let mut found: Vec<(usize, PathBuf)> = Vec::new();

        for entry in fs::read_dir(project_path)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_lowercase();
            if let Some(rank) = LICENSE_FILE_NAMES.iter().position(|n| *n == file_name) {
                found.push((rank, entry.path()));
            }
        }

        found.sort();
        Ok(found.into_iter().next().map(|(_, path)| path))
    }
}

impl Default for LicenseFileDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseDetector for LicenseFileDetector {
    fn detect(&self, project_path: &Path) -> Result<Option<LicenseInfo>> {
        let Some(path) = Self::find_license_file(project_path)? else {
            return Ok(None);
        };

        let text = read_checked_to_string(&path, "license file")?;
        let license_id = LicensePolicy::identify(&text).map(str::to_string);
        let comments = match license_id {
            Some(_) => None,
            None => Some(format!(
                "License text in {} did not match a known SPDX license",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            )),
        };

        Ok(Some(LicenseInfo::new(license_id, Some(text), comments)))
    }
}
