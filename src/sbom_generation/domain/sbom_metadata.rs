/// SbomMetadata value object: document-level facts stamped at generation time
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    document_id: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        document_id: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            document_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// Unique id used for the SPDX document namespace
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}
