//! Runtime: terminal lifecycle, the event loop and persistence flushing.

mod persist;
mod runtime;
mod terminal;

/// Boxed error result used by the runtime's fallible plumbing.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use runtime::{RunOptions, run};
