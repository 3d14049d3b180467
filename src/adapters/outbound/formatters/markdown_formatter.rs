use crate::application::read_models::{ComponentView, DependencyView, SbomMetadataView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;

/// Markdown table header for the component inventory
const INVENTORY_HEADER: &str = "| Module | Version | License | Supplier | SHA256 |\n";

const INVENTORY_SEPARATOR: &str = "|--------|---------|---------|----------|--------|\n";

/// Markdown table header for a dependency list
const DEPENDENCY_HEADER: &str = "| Module | Version |\n";

const DEPENDENCY_SEPARATOR: &str = "|--------|---------|\n";

/// Placeholder for an empty table cell
const NOT_AVAILABLE: &str = "N/A";

/// MarkdownFormatter adapter for a human-readable SBOM report
///
/// Renders document information, the component inventory, and one
/// dependency table per module that has dependencies (root first).
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell_or_na(value: Option<&str>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => Self::escape_markdown_table_cell(v),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// Module name, linked to its homepage when one is known
    fn format_module_name(component: &ComponentView) -> String {
        let name = Self::escape_markdown_table_cell(&component.name);
        match &component.homepage {
            Some(url) => format!("[{}]({})", name, url),
            None => name,
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &SbomMetadataView) {
        output.push_str("# Software Bill of Materials (SBOM)\n\n");
        output.push_str(&format!(
            "**Project:** {}  \n",
            Self::escape_markdown_table_cell(&metadata.document_name)
        ));
        output.push_str(&format!(
            "**Generated by:** {} {}  \n",
            metadata.tool_name, metadata.tool_version
        ));
        output.push_str(&format!("**Created:** {}  \n", metadata.timestamp));
        output.push_str(&format!("**Document ID:** {}\n\n", metadata.document_id));
    }

    fn render_components(&self, output: &mut String, components: &[ComponentView]) {
        output.push_str("## Component Inventory\n\n");
        output.push_str(
            "Every module found in the build descriptor, the resolved dependency list, and the build plugins.\n\n",
        );
        output.push_str(INVENTORY_HEADER);
        output.push_str(INVENTORY_SEPARATOR);

        for component in components {
            let license = component.license.as_ref().map(|l| l.declared.as_str());
            let checksum = component.checksum.as_ref().map(|c| c.value.as_str());

            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::format_module_name(component),
                Self::cell_or_na(Some(&component.version)),
                Self::cell_or_na(license),
                Self::cell_or_na(component.supplier.as_deref()),
                Self::cell_or_na(checksum)
            ));
        }
        output.push('\n');
    }

    fn render_dependencies(
        &self,
        output: &mut String,
        deps: &DependencyView,
        components: &[ComponentView],
    ) {
        output.push_str("## Dependencies\n\n");

        if deps.edges.is_empty() {
            output.push_str("*No dependency relationships found*\n\n");
            return;
        }

        let ordered = components
            .iter()
            .filter(|c| c.is_root)
            .chain(components.iter().filter(|c| !c.is_root));

        for parent in ordered {
            let mut edges = deps.edges_from(&parent.spdx_id).peekable();
            if edges.peek().is_none() {
                continue;
            }

            output.push_str(&format!(
                "### Dependencies for {}\n\n",
                Self::escape_markdown_table_cell(&parent.name)
            ));
            output.push_str(DEPENDENCY_HEADER);
            output.push_str(DEPENDENCY_SEPARATOR);
            for edge in edges {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&edge.to_name),
                    Self::cell_or_na(Some(&edge.to_version))
                ));
            }
            output.push('\n');
        }
    }
}

impl SbomFormatter for MarkdownFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_components(&mut output, &model.components);
        self.render_dependencies(&mut output, &model.dependencies, &model.components);

        Ok(output)
    }
}
