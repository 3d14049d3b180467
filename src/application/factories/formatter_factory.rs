use crate::adapters::outbound::formatters::{MarkdownFormatter, SpdxJsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Factory selecting the formatter adapter for an output format
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the given format
    ///
    /// # Examples
    /// ```
    /// use mvn_sbom::application::dto::OutputFormat;
    /// use mvn_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Json => Box::new(SpdxJsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress message shown while the document is rendered
    ///
    /// # Examples
    /// ```
    /// use mvn_sbom::application::dto::OutputFormat;
    /// use mvn_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating SPDX 2.3 JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating SPDX 2.3 JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SbomReadModelBuilder;
    use crate::sbom_generation::domain::{Checksum, Module, ModuleGraph, SbomMetadata};

    fn render(format: OutputFormat) -> String {
        let mut root = Module::new("demo", "1.0", Checksum::empty());
        root.root = true;
        let graph = ModuleGraph::new(vec![root]);
        let metadata = SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "mvn-sbom".to_string(),
            "0.1.0".to_string(),
            "id".to_string(),
        );
        let model = SbomReadModelBuilder::build(&graph, &metadata);

        FormatterFactory::create(format).format(&model).unwrap()
    }

    #[test]
    fn test_create_json_formatter() {
        assert!(render(OutputFormat::Json).contains("\"spdxVersion\": \"SPDX-2.3\""));
    }

    #[test]
    fn test_create_markdown_formatter() {
        assert!(render(OutputFormat::Markdown).starts_with("# Software Bill of Materials"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating SPDX 2.3 JSON output..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown report..."
        );
    }
}
