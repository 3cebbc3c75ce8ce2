//! Conditional logging macros.
//!
//! The layout engine reports derived joint positions through these. With
//! the `tracing` feature enabled they are the real `tracing` macros;
//! without it they expand to nothing and the instrumented expressions are
//! never evaluated.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
