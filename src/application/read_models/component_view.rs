//! Component view structs for the read model

/// View representation of one module
#[derive(Debug, Clone)]
pub struct ComponentView {
    /// Document-unique reference (`SPDXRef-Package-…`)
    pub spdx_id: String,
    pub name: String,
    /// Empty when the version could not be resolved
    pub version: String,
    pub is_root: bool,
    pub checksum: Option<ChecksumView>,
    /// Rendered supplier, e.g. `Person: Jane Doe (jane@example.com)`
    pub supplier: Option<String>,
    pub homepage: Option<String>,
    pub download_location: Option<String>,
    pub license: Option<LicenseView>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumView {
    /// SPDX algorithm name, e.g. `SHA256`
    pub algorithm: String,
    pub value: String,
}

/// View representation of license information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseView {
    pub declared: String,
    pub concluded: String,
    pub comments: Option<String>,
}
