//! Extension for mapping foreign errors into `ResolverResult` concisely.
//!
//! # Examples
//!
//! ```
//! use config_resolver::{ResolverResult, ResolverResultExt};
//!
//! fn decode() -> ResolverResult<u16> {
//!     // serde_json::Error implements Into<ResolverError>
//!     serde_json::from_str("8080").into_resolver()
//! }
//! # assert_eq!(decode().ok(), Some(8080));
//! ```

use crate::{ResolverError, ResolverResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ResolverError>` into a [`ResolverResult<T>`].
pub trait ResolverResultExt<T, E> {
    /// Convert `Result<T, E>` into `ResolverResult<T>` using
    /// `Into<ResolverError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion.
    fn into_resolver(self) -> ResolverResult<T>;
}

impl<T, E> ResolverResultExt<T, E> for Result<T, E>
where
    E: Into<ResolverError>,
{
    fn into_resolver(self) -> ResolverResult<T> {
        self.map_err(Into::into)
    }
}
