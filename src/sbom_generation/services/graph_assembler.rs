use crate::sbom_generation::domain::{DependencyTree, Module, ModuleGraph};
use std::collections::HashMap;

/// GraphAssembler service wiring tree edges onto the unlinked module list
///
/// Pure algorithm with no I/O. Edges whose parent or child is not a known
/// module are dropped; no module is ever created here.
pub struct GraphAssembler;

impl GraphAssembler {
    /// Populates each module's dependency mapping from the tree
    ///
    /// Names resolve through a single name→index lookup; when several modules
    /// share a name the last one wins. Each attached dependency is an owned
    /// snapshot of the child without its own dependencies.
    pub fn assemble(mut modules: Vec<Module>, tree: &DependencyTree) -> ModuleGraph {
        let index: HashMap<String, usize> = modules
            .iter()
            .enumerate()
            .map(|(i, module)| (module.name.clone(), i))
            .collect();

        for (parent, children) in tree.children() {
            let Some(&parent_idx) = index.get(parent) else {
                continue;
            };

            for child in children {
                let Some(&child_idx) = index.get(child) else {
                    continue;
                };

                let snapshot = modules[child_idx].snapshot();
                modules[parent_idx]
                    .dependencies
                    .insert(child.clone(), snapshot);
            }
        }

        ModuleGraph::new(modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{Checksum, ChecksumAlgorithm};
    use crate::sbom_generation::services::TreeParser;
    use std::collections::BTreeMap;

    fn module(name: &str, version: &str) -> Module {
        Module::new(
            name,
            version,
            Checksum::new(ChecksumAlgorithm::Sha256, format!("sum-{}", name)),
        )
    }

    fn tree(edges: &[(&str, &[&str])]) -> DependencyTree {
        let children: BTreeMap<String, Vec<String>> = edges
            .iter()
            .map(|(parent, kids)| {
                (
                    parent.to_string(),
                    kids.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        DependencyTree::new(children, 0)
    }

    #[test]
    fn test_assemble_wires_edges_from_parsed_tree() {
        let text = "com.a:root:jar:1.0\n+- com.a:child1:jar:1.0\n|  \\- com.a:grand1:jar:1.0\n\\- com.a:child2:jar:1.0\n";
        let mut root = module("root", "1.0");
        root.root = true;
        let modules = vec![
            root,
            module("child1", "1.0"),
            module("child2", "1.0"),
            module("grand1", "1.0"),
        ];

        let graph = GraphAssembler::assemble(modules, &TreeParser::parse(text));

        let root = graph.root().unwrap();
        let deps: Vec<&str> = root.dependencies.keys().map(String::as_str).collect();
        assert_eq!(deps, vec!["child1", "child2"]);
        assert!(graph.find("child1").unwrap().dependencies.contains_key("grand1"));
        assert!(graph.find("grand1").unwrap().dependencies.is_empty());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_unknown_parent_and_child_are_skipped() {
        let modules = vec![module("app", "1.0"), module("lib", "2.0")];
        let edges = tree(&[("app", &["lib", "ghost"]), ("phantom", &["lib"])]);

        let graph = GraphAssembler::assemble(modules, &edges);

        assert_eq!(graph.module_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.find("app").unwrap().dependencies.contains_key("ghost"));
    }

    #[test]
    fn test_edges_only_reference_known_modules() {
        let modules = vec![module("a", "1"), module("b", "1"), module("c", "1")];
        let edges = tree(&[("a", &["b", "x"]), ("b", &["c"]), ("y", &["a"])]);

        let graph = GraphAssembler::assemble(modules, &edges);

        for module in graph.modules() {
            for name in module.dependencies.keys() {
                assert!(graph.find(name).is_some(), "invented module {}", name);
            }
        }
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let modules = vec![module("a", "1"), module("b", "1"), module("shared", "3.0")];
        let edges = tree(&[("a", &["shared"]), ("b", &["shared"])]);

        let graph = GraphAssembler::assemble(modules, &edges);
        let mut modules = graph.into_modules();

        modules[0]
            .dependencies
            .get_mut("shared")
            .unwrap()
            .version = "changed".to_string();

        assert_eq!(modules[1].dependencies["shared"].version, "3.0");
        assert_eq!(modules[2].version, "3.0");
    }

    #[test]
    fn test_snapshot_excludes_grandchildren() {
        let modules = vec![module("a", "1"), module("b", "1"), module("c", "1")];
        let edges = tree(&[("a", &["b"]), ("b", &["c"])]);

        let graph = GraphAssembler::assemble(modules, &edges);
        let edge = &graph.find("a").unwrap().dependencies["b"];

        assert_eq!(edge.checksum.value(), "sum-b");
        assert!(edge.dependencies.is_empty());
    }

    #[test]
    fn test_duplicate_names_resolve_to_last_module() {
        let modules = vec![module("app", "1"), module("dup", "1.0"), module("dup", "2.0")];
        let edges = tree(&[("app", &["dup"])]);

        let graph = GraphAssembler::assemble(modules, &edges);

        assert_eq!(graph.find("app").unwrap().dependencies["dup"].version, "2.0");
        assert_eq!(graph.module_count(), 3);
    }

    #[test]
    fn test_empty_tree_leaves_modules_unlinked() {
        let modules = vec![module("app", "1")];
        let graph = GraphAssembler::assemble(modules, &DependencyTree::default());

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.module_count(), 1);
    }
}
