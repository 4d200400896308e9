pub mod errors;
pub mod types;

pub use errors::{ConfigError, SkydomeError};
pub use types::{Resolution, Rgba};

pub type Result<T> = std::result::Result<T, SkydomeError>;
