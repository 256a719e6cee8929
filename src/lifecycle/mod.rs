//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Ctrl+C or Shutdown::trigger() → Stop accepting → Drain connections → Exit
//! ```

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
