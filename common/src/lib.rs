//! Shared building blocks for `appctl`.
//!
//! Holds the wire models, the [`error::ApiError`] taxonomy and the runtime
//! [`config::Config`] used by both the core and the CLI.

pub mod config;
pub mod error;
pub mod models;

#[doc(hidden)]
pub use tracing;

/// Reports a finished operation. Rendered with the `[+]` symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "appctl::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "appctl::status", $($arg)*)
    };
}
