//! Dependency view structs for the read model

/// Flattened list of direct dependency edges
#[derive(Debug, Clone, Default)]
pub struct DependencyView {
    pub edges: Vec<DependencyEdgeView>,
}

impl DependencyView {
    /// Edges leaving the given component reference
    pub fn edges_from<'a>(&'a self, spdx_id: &'a str) -> impl Iterator<Item = &'a DependencyEdgeView> {
        self.edges.iter().filter(move |edge| edge.from_ref == spdx_id)
    }
}

/// One parent→child edge, carrying both references and display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdgeView {
    pub from_ref: String,
    pub from_name: String,
    pub to_ref: String,
    pub to_name: String,
    pub to_version: String,
}
