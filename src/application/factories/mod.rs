/// Factories choosing adapters from application-level options
mod formatter_factory;
mod presenter_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
