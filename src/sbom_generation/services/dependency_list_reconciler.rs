use super::manifest_extractor::{checksum_or_empty, ExtractedModules};
use crate::sbom_generation::domain::{Checksum, Coordinate, Module, PomProject};
use crate::shared::Result;
use std::collections::HashSet;

/// Trailing lines of the normalized list that never carry a coordinate
/// (the completion banner and the blank line after it)
const TRAILING_BOILERPLATE_LINES: usize = 2;

/// Result of reconciling the flat dependency list against the manifest
#[derive(Debug, Clone, Default)]
pub struct Reconciled {
    pub extracted: ExtractedModules,
    /// Lines with no parseable, versioned coordinate
    pub skipped_lines: usize,
}

impl Reconciled {
    pub fn modules(&self) -> &[Module] {
        &self.extracted.modules
    }
}

/// DependencyListReconciler service adding modules only the flat list knows about
///
/// The flat list is the sorted, de-duplicated `mvn dependency:list` output.
/// An artifact is new when no declared dependency and no dependency-management
/// entry carries the same artifact id.
pub struct DependencyListReconciler;

impl DependencyListReconciler {
    /// Splits normalized list text into lines, keeping the trailing empty line
    pub fn split_lines(text: &str) -> Vec<String> {
        text.split('\n')
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect()
    }

    /// Reconciles list lines against the manifest's declared artifacts
    ///
    /// The final two lines are excluded whatever they contain. Every other
    /// well-formed, unmatched line yields exactly one new module.
    pub fn reconcile<F>(lines: &[String], project: &PomProject, checksum: F) -> Reconciled
    where
        F: Fn(&str) -> Result<Checksum>,
    {
        let declared: HashSet<&str> = project
            .declared_dependencies()
            .iter()
            .chain(project.managed_dependencies())
            .map(|dependency| dependency.artifact_id.trim())
            .collect();

        let candidates = lines.len().saturating_sub(TRAILING_BOILERPLATE_LINES);
        let mut reconciled = Reconciled::default();

        for line in &lines[..candidates] {
            if line.trim().is_empty() {
                continue;
            }

            let Some((artifact, version)) = Self::parse_list_line(line) else {
                reconciled.skipped_lines += 1;
                continue;
            };

            if declared.contains(artifact.as_str()) {
                continue;
            }

            let checksum = checksum_or_empty(
                &checksum,
                &artifact,
                &mut reconciled.extracted.checksum_failures,
            );
            reconciled
                .extracted
                .modules
                .push(Module::new(artifact.clone(), version, checksum).with_path(artifact));
        }

        reconciled
    }

    /// Artifact and version of one list line
    ///
    /// A `[INFO]`-style log prefix up to the first `]` is dropped first.
    /// Lines without a version are treated as malformed.
    pub fn parse_list_line(line: &str) -> Option<(String, String)> {
        let trimmed = line.trim_start();
        let body = if trimmed.starts_with('[') {
            trimmed.split_once(']').map_or(trimmed, |(_, rest)| rest)
        } else {
            trimmed
        };
        let coordinate = Coordinate::parse(body).ok()?;
        let version = coordinate.version()?.to_string();
        Some((coordinate.artifact().to_string(), version))
    }
}
