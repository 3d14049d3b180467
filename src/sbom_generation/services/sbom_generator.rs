use crate::sbom_generation::domain::SbomMetadata;
use chrono::Utc;
use uuid::Uuid;

/// SbomGenerator service for generating SBOM document metadata
///
/// Timestamps use the second-precision UTC form SPDX expects
/// (`2024-01-01T00:00:00Z`).
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates metadata with the current timestamp and a fresh document id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            Uuid::new_v4().to_string(),
        )
    }

    /// Generates metadata for this tool, using the compile-time crate version
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata("mvn-sbom", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = SbomGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(Uuid::parse_str(metadata.document_id()).is_ok());
        assert!(metadata.timestamp().ends_with('Z'));
        assert_eq!(metadata.timestamp().len(), "2024-01-01T00:00:00Z".len());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = SbomGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "mvn-sbom");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_document_ids_are_unique() {
        let first = SbomGenerator::generate_default_metadata();
        let second = SbomGenerator::generate_default_metadata();

        assert_ne!(first.document_id(), second.document_id());
    }
}
