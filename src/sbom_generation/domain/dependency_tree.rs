use std::collections::BTreeMap;

/// Parent→children mapping recovered from `mvn dependency:tree` text
///
/// Keys and children are short artifact names. Ordering of children follows
/// the order lines appeared in the tree text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    children: BTreeMap<String, Vec<String>>,
    skipped_lines: usize,
}

impl DependencyTree {
    pub fn new(children: BTreeMap<String, Vec<String>>, skipped_lines: usize) -> Self {
        Self {
            children,
            skipped_lines,
        }
    }

    pub fn children(&self) -> &BTreeMap<String, Vec<String>> {
        &self.children
    }

    pub fn children_of(&self, parent: &str) -> Option<&[String]> {
        self.children.get(parent).map(Vec::as_slice)
    }

    /// Lines that carried no parseable coordinate
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn parent_count(&self) -> usize {
        self.children.len()
    }

    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    pub fn into_children(self) -> BTreeMap<String, Vec<String>> {
        self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_tree_counts() {
        let mut children = BTreeMap::new();
        children.insert(
            "root".to_string(),
            vec!["child1".to_string(), "child2".to_string()],
        );
        children.insert("child1".to_string(), vec!["grand1".to_string()]);

        let tree = DependencyTree::new(children, 1);

        assert_eq!(tree.parent_count(), 2);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.skipped_lines(), 1);
        assert_eq!(
            tree.children_of("root"),
            Some(&["child1".to_string(), "child2".to_string()][..])
        );
        assert_eq!(tree.children_of("missing"), None);
    }

    #[test]
    fn test_dependency_tree_empty() {
        let tree = DependencyTree::default();
        assert_eq!(tree.parent_count(), 0);
        assert_eq!(tree.edge_count(), 0);
        assert!(tree.into_children().is_empty());
    }
}
