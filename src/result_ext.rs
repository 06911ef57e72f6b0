//! Extension trait for wrapping the error of a `Result` into a chain.
//!
//! [`ResultExt`] lets the `?`-heavy call sites add a message to a failing
//! `Result` in one step, without naming [`ChainedError`] explicitly:
//!
//! ```
//! use causelink::prelude::*;
//!
//! fn load(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).wrap("failed to load state")
//! }
//! ```

use alloc::borrow::Cow;
use core::error::Error;

use crate::ChainedError;

/// Extension methods for `Result` that wrap the error into a
/// [`ChainedError`].
///
/// Implemented for every `Result<T, E>` where `E` is an error that can be
/// stored as a cause, including `ChainedError` itself.
pub trait ResultExt<T>: Sized {
    /// Wraps the error, if any, with the given message.
    ///
    /// The captured location (when capture mode is enabled) is the call
    /// site of this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use causelink::prelude::*;
    ///
    /// let result: Result<()> = "nope".parse::<i32>().map(drop).wrap("bad port");
    /// let err = result.unwrap_err();
    /// assert_eq!(err.message(), "bad port");
    /// ```
    fn wrap<M>(self, message: M) -> Result<T, ChainedError>
    where
        M: Into<Cow<'static, str>>;

    /// Wraps the error, if any, with a lazily built message.
    ///
    /// The closure runs only on the error path, so building an expensive
    /// message costs nothing on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use causelink::prelude::*;
    ///
    /// let path = "/etc/app.toml";
    /// let result: Result<String> =
    ///     std::fs::read_to_string(path).wrap_with(|| format!("failed to read {path}"));
    /// assert!(result.is_err());
    /// ```
    fn wrap_with<M, F>(self, message: F) -> Result<T, ChainedError>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn wrap<M>(self, message: M) -> Result<T, ChainedError>
    where
        M: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(ChainedError::wrap(cause, message)),
        }
    }

    #[track_caller]
    fn wrap_with<M, F>(self, message: F) -> Result<T, ChainedError>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(ChainedError::wrap(cause, message())),
        }
    }
}
