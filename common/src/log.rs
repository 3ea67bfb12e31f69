//! Terminal logging macros.
//!
//! Every macro forwards to `tracing` with a fixed target so the CLI formatter
//! can pick a prefix. Crates that never install a subscriber pay nothing.

/// Target for ordinary prefixed log lines.
pub const TARGET: &str = "greeter";
/// Target for lines that are printed verbatim, without a level prefix.
pub const PRINT_TARGET: &str = "greeter::print";
/// Target for completed-operation messages.
pub const SUCCESS_TARGET: &str = "greeter::success";

/// Prints a pre-formatted line without any prefix.
#[macro_export]
macro_rules! raw {
    ($msg:expr) => {
        $crate::__tracing::info!(target: $crate::log::PRINT_TARGET, raw_msg = $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: $crate::log::TARGET, $($arg)*)
    };
}
