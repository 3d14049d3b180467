use crate::sbom_generation::domain::{Coordinate, DependencyTree, MalformedCoordinate};
use std::collections::BTreeMap;

/// Marker opening a direct child line (`+- ` more siblings follow, `\- ` last sibling)
const CHILD_MARKERS: [&str; 2] = ["\\-", "+-"];

/// Markers found inside a nested line
const DESCENDANT_MARKERS: [&str; 2] = ["   \\-", "|  \\- "];

/// Nesting level of one line of `mvn dependency:tree` output
///
/// Only two levels below a root are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDepth {
    /// No indentation marker; starts a new top-level package context
    Root,
    /// Direct child of the current root
    Child,
    /// Child of the most recently seen package
    Descendant,
}

impl LineDepth {
    pub fn depth(self) -> usize {
        match self {
            LineDepth::Root => 0,
            LineDepth::Child => 1,
            LineDepth::Descendant => 2,
        }
    }

    pub fn is_dependency(self) -> bool {
        !matches!(self, LineDepth::Root)
    }
}

/// Classifies a raw tree line by its leading glyphs
pub fn classify_line(line: &str) -> LineDepth {
    if CHILD_MARKERS.iter().any(|m| line.starts_with(m)) {
        LineDepth::Child
    } else if DESCENDANT_MARKERS.iter().any(|m| line.contains(m)) {
        LineDepth::Descendant
    } else {
        LineDepth::Root
    }
}

/// Extracts the coordinate a tree line names, ignoring its tree glyphs
pub fn line_coordinate(line: &str) -> Result<Coordinate, MalformedCoordinate> {
    let body = line.trim_start_matches(|c: char| matches!(c, ' ' | '|' | '+' | '\\' | '-'));
    Coordinate::parse(body)
}

/// TreeParser service recovering parent→child edges from tree text
///
/// Pure algorithm with no I/O. Lines without a parseable coordinate are
/// counted and skipped; they never move the root or last-seen cursors.
pub struct TreeParser;

impl TreeParser {
    pub fn parse(text: &str) -> DependencyTree {
        Self::parse_lines(text.lines())
    }

    /// Builds the parent→children map from ordered tree lines
    ///
    /// - Root line: becomes the current root; its child accumulator restarts.
    /// - Child line: appended to the current root's accumulator, which replaces
    ///   the root's entry.
    /// - Descendant line: becomes the sole child of the last seen package,
    ///   replacing any earlier entry for it.
    ///
    /// Every parsed line, whatever its depth, becomes the last seen package.
    pub fn parse_lines<'a, I>(lines: I) -> DependencyTree
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut children: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut current_root: Option<String> = None;
        let mut root_children: Vec<String> = Vec::new();
        let mut last_seen: Option<String> = None;
        let mut skipped_lines = 0;

        for raw in lines {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let name = match line_coordinate(line) {
                Ok(coordinate) => coordinate.artifact().to_string(),
                Err(_) => {
                    skipped_lines += 1;
                    continue;
                }
            };

            match classify_line(line) {
                LineDepth::Root => {
                    current_root = Some(name.clone());
                    root_children.clear();
                }
                LineDepth::Child => {
                    if let Some(root) = &current_root {
                        root_children.push(name.clone());
                        children.insert(root.clone(), root_children.clone());
                    }
                }
                LineDepth::Descendant => {
                    if let Some(parent) = &last_seen {
                        children.insert(parent.clone(), vec![name.clone()]);
                    }
                }
            }

            last_seen = Some(name);
        }

        DependencyTree::new(children, skipped_lines)
    }
}
