//! Error types for Vantage
//!
//! Three kinds of failure exist: a bad configuration (rejected up front or
//! signaled distinctly), a degenerate camera/target placement, and a geometry
//! backend that could not answer a query. "No camera sees the target" is not
//! an error.

use std::fmt;

/// Result type for Vantage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Vantage errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration rejected (empty camera list, bad radius, bad max distance)
    InvalidConfiguration(String),

    /// Camera sits exactly on the target, no cast direction exists
    DegenerateDirection(String),

    /// Geometry backend failed to answer a query
    QueryFailed(String),
}

impl Error {
    /// True for errors caused by the caller's configuration rather than
    /// by the geometry backend.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_) | Error::DegenerateDirection(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::DegenerateDirection(msg) => write!(f, "Degenerate direction: {}", msg),
            Error::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR with file:line and build an `Error::QueryFailed`
///
/// Intended for `GeometryQuery` backends reporting a fault.
///
/// # Example
///
/// ```no_run
/// # use vantage_camera::vantage_err;
/// let err = vantage_err!("my_host::physics", "Broadphase not built for layer {}", 3);
/// ```
#[macro_export]
macro_rules! vantage_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::vantage::Error::QueryFailed(message)
    }};
}

/// Log an ERROR with file:line and return `Err(Error::QueryFailed)`
#[macro_export]
macro_rules! vantage_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::vantage_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
