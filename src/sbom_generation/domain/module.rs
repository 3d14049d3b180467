use std::collections::BTreeMap;
use std::fmt;

/// Digest algorithm used for module checksums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Sha256,
}

impl ChecksumAlgorithm {
    /// SPDX spelling of the algorithm name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => "SHA256",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checksum value object: algorithm plus lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    algorithm: ChecksumAlgorithm,
    value: String,
}

impl Checksum {
    pub fn new(algorithm: ChecksumAlgorithm, value: String) -> Self {
        Self { algorithm, value }
    }

    /// Checksum with an empty digest, used when computation failed
    pub fn empty() -> Self {
        Self::new(ChecksumAlgorithm::Sha256, String::new())
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierType {
    Person,
    Organization,
}

impl SupplierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierType::Person => "Person",
            SupplierType::Organization => "Organization",
        }
    }
}

/// Who supplies a module, derived from the manifest's first developer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub supplier_type: SupplierType,
    pub name: String,
    pub email: Option<String>,
}

/// One resolvable unit of software: the project, a sub-module, a dependency or a plugin
///
/// Identity is the short artifact name. Two artifacts from different groups that share
/// a name collide; the later record in an unlinked list wins lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub name: String,
    pub version: String,
    /// Reference the checksum was computed over
    pub path: String,
    pub checksum: Checksum,
    pub supplier: Option<Supplier>,
    pub homepage: Option<String>,
    pub download_location: Option<String>,
    pub license_declared: Option<String>,
    pub license_concluded: Option<String>,
    pub license_comments: Option<String>,
    pub copyright: Option<String>,
    pub root: bool,
    /// Direct dependencies keyed by name. Each entry is an owned snapshot.
    pub dependencies: BTreeMap<String, Module>,
}

impl Module {
    /// Creates an unlinked, non-root module
    pub fn new(name: impl Into<String>, version: impl Into<String>, checksum: Checksum) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            path: String::new(),
            checksum,
            supplier: None,
            homepage: None,
            download_location: None,
            license_declared: None,
            license_concluded: None,
            license_comments: None,
            copyright: None,
            root: false,
            dependencies: BTreeMap::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Copy of every field except the dependency mapping
    pub fn snapshot(&self) -> Self {
        Self {
            dependencies: BTreeMap::new(),
            ..self.clone()
        }
    }

    pub fn is_linked(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// Last path segment of an artifact identifier
pub fn base_name(artifact_id: &str) -> &str {
    artifact_id
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(artifact_id)
}
