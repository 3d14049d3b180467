use std::path::Path;
use mvn_sbom::prelude::*;

/// Mock LicenseDetector returning a fixed detection result
#[derive(Default)]
pub struct MockLicenseDetector {
    pub license: Option<LicenseInfo>,
    pub should_fail: bool,
}

impl MockLicenseDetector {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_license(license_id: &str, text: &str) -> Self {
        Self {
            license: Some(LicenseInfo::new(
                Some(license_id.to_string()),
                Some(text.to_string()),
                None,
            )),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            license: None,
            should_fail: true,
        }
    }
}

impl LicenseDetector for MockLicenseDetector {
    fn detect(&self, _project_path: &Path) -> Result<Option<LicenseInfo>> {
        if self.should_fail {
            anyhow::bail!("Mock license detection failure");
        }
        Ok(self.license.clone())
    }
}
