/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: disk, the Maven
/// process, the console and the document formatters.
pub mod outbound;
