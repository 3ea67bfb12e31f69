//! Items shared by every `greeter` crate: the run [`config::Config`] and the
//! terminal logging macros in [`log`].

pub mod config;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
