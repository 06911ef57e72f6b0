//! Generic walking of error chains.
//!
//! These functions operate on any `dyn Error`, not only [`ChainedError`]:
//! one step of structural unwrapping is [`Error::source`], so they compose
//! with foreign error types that expose their causes the standard way.

use alloc::string::ToString;
use core::{error::Error, mem};

use crate::ChainedError;

/// Returns the immediate cause of `err`, or `None` if it has no cause or
/// does not expose one.
///
/// This is a single step of [`Error::source`]; call it repeatedly to walk a
/// chain.
///
/// # Examples
///
/// ```
/// use causelink::{new, unwrap, wrap};
///
/// let err = wrap(new("x"), "y");
/// let cause = unwrap(&err).expect("wrapped error has a cause");
/// assert!(cause.to_string().contains("x"));
/// assert!(unwrap(cause).is_none());
/// ```
#[must_use]
pub fn unwrap<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    err.source()
}

/// Reports whether any link in `err`'s chain matches `target`.
///
/// Walks the chain from `err` outward. A [`ChainedError`] link matches
/// according to [`ChainedError::is`] (identity by message). A foreign link
/// matches the very same object as `target`; a zero-sized foreign link has
/// exactly one value, so it instead matches any zero-sized `target` with
/// the same rendered message.
///
/// # Examples
///
/// ```
/// use causelink::{is, new, wrap};
///
/// let sentinel = new("not found");
/// let err = wrap(wrap(new("not found"), "loading profile"), "handling request");
/// assert!(is(&err, &sentinel));
/// assert!(!is(&new("timed out"), &sentinel));
/// ```
#[must_use]
pub fn is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let mut link = Some(err);
    while let Some(current) = link {
        match current.downcast_ref::<ChainedError>() {
            Some(chained) => {
                if chained.is(target) {
                    return true;
                }
            }
            None => {
                if foreign_matches(current, target) {
                    return true;
                }
            }
        }
        link = current.source();
    }
    false
}

/// Fallback match for links that are not [`ChainedError`]: reference
/// identity, except that zero-sized errors (which have exactly one value
/// and whose boxed address is dangling) compare by rendered message.
fn foreign_matches(link: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    match (mem::size_of_val(link), mem::size_of_val(target)) {
        (0, 0) => link.to_string() == target.to_string(),
        (0, _) | (_, 0) => false,
        _ => core::ptr::addr_eq(link, target),
    }
}

/// Finds the first link in `err`'s chain with concrete type `T`.
///
/// Walks the chain from `err` outward, returning a reference to the first
/// link that downcasts to `T`, or `None` if no link has that type.
///
/// # Examples
///
/// ```
/// use causelink::{downcast_ref, wrap};
///
/// let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let err = wrap(io_err, "startup failed");
///
/// let found = downcast_ref::<std::io::Error>(&err).expect("chain holds an io::Error");
/// assert_eq!(found.kind(), std::io::ErrorKind::NotFound);
/// assert!(downcast_ref::<std::fmt::Error>(&err).is_none());
/// ```
#[must_use]
pub fn downcast_ref<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    let mut link = Some(err);
    while let Some(current) = link {
        if let Some(found) = current.downcast_ref::<T>() {
            return Some(found);
        }
        link = current.source();
    }
    None
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{new, wrap};

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset")]
    struct ConnReset;

    #[derive(Debug, thiserror::Error)]
    #[error("broken pipe")]
    struct BrokenPipe;

    #[derive(Debug, thiserror::Error)]
    #[error("reset by peer {peer}")]
    struct PeerReset {
        peer: u8,
    }

    #[test]
    fn test_unwrap_root_is_none() {
        assert!(unwrap(&new("x")).is_none());
    }

    #[test]
    fn test_unwrap_returns_immediate_cause() {
        let err = wrap(new("x"), "y");
        let cause = unwrap(&err).expect("cause present");
        let cause = cause.downcast_ref::<ChainedError>().expect("cause is chained");
        assert_eq!(cause.message(), "x");
    }

    #[test]
    fn test_is_matches_by_message_across_depth() {
        let sentinel = new("x");
        assert!(is(&wrap(new("x"), "y"), &sentinel));
        assert!(is(&wrap(wrap(new("x"), "y"), "z"), &sentinel));
    }

    #[test]
    fn test_is_distinct_messages_do_not_match() {
        assert!(!is(&new("x"), &new("y")));
    }

    #[test]
    fn test_is_foreign_target_matches_link_message() {
        // A ChainedError link matches a foreign target whose rendered
        // message equals the link's own message.
        let err = wrap(new("connection reset"), "request failed");
        assert!(is(&err, &ConnReset));
    }

    #[test]
    fn test_is_foreign_link_matches_same_object() {
        let err = wrap(PeerReset { peer: 1 }, "request failed");
        let foreign_link = unwrap(&err).expect("cause present");
        assert!(is(&err, foreign_link));
    }

    #[test]
    fn test_is_stateful_foreign_link_requires_same_object() {
        // A distinct instance does not match by identity, even with an
        // identical rendered message.
        let err = wrap(PeerReset { peer: 1 }, "request failed");
        assert!(!is(&err, &PeerReset { peer: 1 }));
    }

    #[test]
    fn test_is_zero_sized_foreign_link_matches_by_value() {
        // ConnReset carries no state, so every instance is the same value.
        let err = wrap(ConnReset, "request failed");
        assert!(is(&err, &ConnReset));
        assert!(!is(&err, &BrokenPipe));
        // A zero-sized link never matches a stateful target.
        assert!(!is(&err, &PeerReset { peer: 1 }));
    }

    #[test]
    fn test_downcast_ref_finds_wrapped_foreign_error() {
        let err = wrap(ConnReset, "request failed");
        let found = downcast_ref::<ConnReset>(&err).expect("foreign error in chain");
        assert_eq!(found.to_string(), "connection reset");
    }

    #[test]
    fn test_downcast_ref_absent_type_is_none() {
        let err = wrap(new("inner"), "outer");
        assert!(downcast_ref::<ConnReset>(&err).is_none());
    }

    #[test]
    fn test_downcast_ref_finds_outermost_match_first() {
        let outer = wrap(wrap(new("root"), "mid"), "top");
        let found = downcast_ref::<ChainedError>(&outer).expect("chained link");
        assert_eq!(found.message(), "top");
    }
}
