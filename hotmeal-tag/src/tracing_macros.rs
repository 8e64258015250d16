//! Logging shims.
//!
//! With the `tracing` feature these are `tracing`'s own macros; without it they
//! swallow their arguments and compile to nothing.

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use debug;

#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use trace;
