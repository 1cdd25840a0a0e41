///
/// Runtime error types.
///
/// Every `RuntimeError` is fatal: generated code is expected to rule these
/// conditions out ahead of time, so the runtime terminates instead of
/// unwinding through live values.
///

use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("cannot convert string {text:?} to a number")]
    StringToNumber { text: String },

    #[error("failed to allocate {bytes} bytes")]
    AllocationFailed { bytes: usize },
}

impl RuntimeError {
    /// Short category name, stable across releases
    pub fn category(&self) -> &'static str {
        match self {
            RuntimeError::StringToNumber { .. } => "string-to-number",
            RuntimeError::AllocationFailed { .. } => "allocation",
        }
    }
}

/// Terminate the process for an unrecoverable runtime error.
///
/// Exits with `RuntimeConfig::exit_status`; no destructors of other live
/// values run.
pub fn fatal(err: RuntimeError) -> ! {
    let status = config::current().exit_status();
    tracing::error!(category = err.category(), status, "fatal runtime error: {err}");
    std::process::exit(status)
}
