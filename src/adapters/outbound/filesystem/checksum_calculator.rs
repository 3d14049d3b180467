use super::file_reader::MANIFEST_FILE_NAME;
use crate::ports::outbound::ChecksumCalculator;
use crate::sbom_generation::domain::{Checksum, ChecksumAlgorithm};
use crate::shared::security::read_checked_bytes;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Sha256ChecksumCalculator adapter hashing module references with SHA-256
///
/// A reference is resolved against the project directory:
/// - a regular file is hashed by content
/// - a directory holding a `pom.xml` (a sub-module) hashes that descriptor
/// - anything else (an artifact id) hashes the reference text itself
pub struct Sha256ChecksumCalculator;

impl Sha256ChecksumCalculator {
    pub fn new() -> Self {
        Self
    }

    fn hex_digest(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hex::encode(hasher.finalize())
    }

    fn content_source(project_path: &Path, reference: &str) -> Option<PathBuf> {
        let candidate = project_path.join(reference);
        if candidate.is_file() {
            return Some(candidate);
        }

        let descriptor = candidate.join(MANIFEST_FILE_NAME);
        (candidate.is_dir() && descriptor.is_file()).then_some(descriptor)
    }
}

impl Default for Sha256ChecksumCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecksumCalculator for Sha256ChecksumCalculator {
    fn checksum(&self, project_path: &Path, reference: &str) -> Result<Checksum> {
        let digest = match Self::content_source(project_path, reference) {
            Some(path) => Self::hex_digest(&read_checked_bytes(&path, reference)?),
            None => Self::hex_digest(reference.as_bytes()),
        };

        Ok(Checksum::new(ChecksumAlgorithm::Sha256, digest))
    }
}
