/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "kpwgen";

pub mod cli;
mod error;
pub mod helpers;

pub use error::Error;
pub type Result<T> = std::result::Result<T, error::Error>;
