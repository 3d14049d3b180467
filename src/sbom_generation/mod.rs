/// Domain layer - module graph extraction logic with no I/O
pub mod domain;
pub mod policies;
pub mod services;
