/// Result alias used across every layer, with `anyhow::Error` carrying
/// `SbomError` values and any context attached on the way up.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
