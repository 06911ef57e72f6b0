/// Creates a root [`ChainedError`] with a formatted message.
///
/// The arguments are interpreted exactly as by [`format!`]. When the format
/// string has no arguments, the message is kept as a `&'static str` without
/// allocating.
///
/// The captured location (when capture mode is enabled) is the macro call
/// site.
///
/// [`ChainedError`]: crate::ChainedError
/// [`format!`]: alloc::format
///
/// # Examples
///
/// ```
/// use causelink::newf;
///
/// let err = newf!("no route to {}:{}", "db.internal", 5432);
/// assert_eq!(err.message(), "no route to db.internal:5432");
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::__private::format_chained($crate::__private::format_args!($($arg)*))
    };
}

/// Wraps an existing error with a formatted message.
///
/// The first argument is the cause; the rest are interpreted exactly as by
/// [`format!`]. The captured location (when capture mode is enabled) is the
/// macro call site.
///
/// [`format!`]: alloc::format
///
/// # Examples
///
/// ```
/// use causelink::{new, wrapf};
///
/// let err = wrapf!(new("timed out"), "retry {} of {} failed", 3, 5);
/// assert_eq!(err.message(), "retry 3 of 5 failed");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)*) => {
        $crate::__private::format_wrapped($cause, $crate::__private::format_args!($($arg)*))
    };
}

/// Returns early with a root [`ChainedError`].
///
/// Constructs an error using the same arguments as [`newf!`] and returns it
/// from the enclosing function wrapped in `Err`. Equivalent to
/// `return Err(newf!(...).into())`.
///
/// [`ChainedError`]: crate::ChainedError
///
/// # Examples
///
/// ```
/// use causelink::prelude::*;
///
/// fn check(value: i32) -> Result<()> {
///     if value < 0 {
///         bail!("value must be non-negative, got {}", value);
///     }
///     Ok(())
/// }
///
/// assert!(check(-1).is_err());
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return $crate::__private::Err($crate::newf!($($arg)*).into())
    };
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{ChainedError, Result, new};

    #[test]
    fn test_newf_formats_arguments() {
        let err = newf!("no route to {}:{}", "host", 80);
        assert_eq!(err.message(), "no route to host:80");
    }

    #[test]
    fn test_newf_plain_literal() {
        let err = newf!("plain");
        assert_eq!(err.message(), "plain");
    }

    #[test]
    fn test_wrapf_formats_and_chains() {
        let err = wrapf!(new("inner"), "attempt {} failed", 2);
        assert_eq!(err.message(), "attempt 2 failed");
        assert_eq!(err.to_string(), "\tError: attempt 2 failed\n\n\tError: inner\n\n");
    }

    #[test]
    fn test_bail_returns_early() {
        fn fails() -> Result<()> {
            bail!("bad input: {}", "quux");
        }

        let err: ChainedError = fails().unwrap_err();
        assert_eq!(err.message(), "bad input: quux");
    }
}
