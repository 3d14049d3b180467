/// Business rules that are not tied to a single service
mod license_policy;

pub use license_policy::{LicensePolicy, NOASSERTION};
