//! I/O modules for snapshot loading and control-directive dispatch.

pub mod async_loader;
pub mod control_dispatcher;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadResult};
pub use control_dispatcher::{ControlDispatcher, ControlSubmission};
