use std::collections::HashSet;
use std::path::Path;
use mvn_sbom::prelude::*;
use mvn_sbom::sbom_generation::domain::{Checksum, ChecksumAlgorithm};

/// Mock ChecksumCalculator deriving a fake digest from the reference
#[derive(Default)]
pub struct MockChecksumCalculator {
    failing: HashSet<String>,
}

impl MockChecksumCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, reference: &str) -> Self {
        self.failing.insert(reference.to_string());
        self
    }

    pub fn digest_of(reference: &str) -> String {
        format!("digest-{}", reference)
    }
}

impl ChecksumCalculator for MockChecksumCalculator {
    fn checksum(&self, _project_path: &Path, reference: &str) -> Result<Checksum> {
        if self.failing.contains(reference) {
            anyhow::bail!("Mock checksum failure for {}", reference);
        }
        Ok(Checksum::new(
            ChecksumAlgorithm::Sha256,
            Self::digest_of(reference),
        ))
    }
}
