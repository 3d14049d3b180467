/// LicenseInfo value object: what license detection found for a project directory
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LicenseInfo {
    license_id: Option<String>,
    extracted_text: Option<String>,
    comments: Option<String>,
}

impl LicenseInfo {
    pub fn new(
        license_id: Option<String>,
        extracted_text: Option<String>,
        comments: Option<String>,
    ) -> Self {
        Self {
            license_id,
            extracted_text,
            comments,
        }
    }

    /// SPDX license identifier, when one was recognized
    pub fn license_id(&self) -> Option<&str> {
        self.license_id.as_deref()
    }

    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted_text.as_deref()
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_info_new() {
        let info = LicenseInfo::new(
            Some("MIT".to_string()),
            Some("MIT License".to_string()),
            None,
        );
        assert_eq!(info.license_id(), Some("MIT"));
        assert_eq!(info.extracted_text(), Some("MIT License"));
        assert_eq!(info.comments(), None);
    }

    #[test]
    fn test_license_info_empty() {
        let info = LicenseInfo::default();
        assert_eq!(info.license_id(), None);
        assert_eq!(info.extracted_text(), None);
        assert_eq!(info.comments(), None);
    }
}
