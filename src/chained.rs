use alloc::{borrow::Cow, boxed::Box, string::ToString};
use core::{error::Error, fmt, panic::Location};

use crate::capture;

/// A boxed error suitable for storage as the cause of a [`ChainedError`].
///
/// Any `Error + Send + Sync + 'static` value converts into this via [`From`],
/// as does an already-boxed error, so [`ChainedError::wrap`] accepts both.
pub type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// An immutable link in a causal chain of errors.
///
/// Each value holds a message, an optional captured source location, and an
/// optional cause. The cause may be another `ChainedError` or any foreign
/// error; the chain is a singly-linked list ending at the first link without
/// a cause. Values are never mutated after construction and are safe to
/// share across threads.
///
/// The chain must stay acyclic. Constructors take their cause by value, so
/// building a cycle requires deliberately smuggling a reference through
/// another type; doing so is a caller bug and rendering such a chain will
/// not terminate.
///
/// # Examples
///
/// ```
/// use causelink::ChainedError;
///
/// let root = ChainedError::new("permission denied");
/// let err = ChainedError::wrap(root, "failed to open state file");
///
/// assert_eq!(err.message(), "failed to open state file");
/// assert_eq!(
///     err.to_string(),
///     "\tError: failed to open state file\n\n\tError: permission denied\n\n",
/// );
/// ```
pub struct ChainedError {
    message: Cow<'static, str>,
    location: Option<&'static Location<'static>>,
    cause: Option<BoxedCause>,
}

impl ChainedError {
    /// Creates a root error with the given message and no cause.
    ///
    /// Captures the call site if capture mode is enabled; see
    /// [`set_stack_capture_mode`](crate::set_stack_capture_mode).
    /// Construction never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use causelink::ChainedError;
    ///
    /// let err = ChainedError::new("index out of range");
    /// assert_eq!(err.message(), "index out of range");
    /// assert!(err.cause().is_none());
    /// ```
    #[must_use]
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            location: capture::current_location(),
            cause: None,
        }
    }

    /// Wraps an existing error with a new message.
    ///
    /// The cause may be another `ChainedError`, any foreign error type, or
    /// an already-boxed `dyn Error`. Captures the call site if capture mode
    /// is enabled. Construction never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use causelink::ChainedError;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such table");
    /// let err = ChainedError::wrap(io_err, "query failed");
    /// assert!(err.cause().is_some());
    /// ```
    #[must_use]
    #[track_caller]
    pub fn wrap(cause: impl Into<BoxedCause>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            location: capture::current_location(),
            cause: Some(cause.into()),
        }
    }

    /// Returns this link's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location captured at construction, as a
    /// `(file, line)` pair, or `None` if capture mode was disabled at the
    /// time.
    #[must_use]
    pub fn location(&self) -> Option<(&'static str, u32)> {
        self.location.map(|location| (location.file(), location.line()))
    }

    /// Returns the immediate cause of this link, if any.
    ///
    /// Equivalent to [`Error::source`], which this type also implements.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }

    /// Reports whether this link matches `target`: identity by message.
    ///
    /// If `target` is itself a `ChainedError`, the two match when their
    /// messages are string-equal, regardless of cause chain or captured
    /// location. This lets calling code build a sentinel once and classify
    /// errors by message independent of wrapping depth.
    ///
    /// If `target` is a foreign error, this link's message is compared
    /// against the target's full `Display` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use causelink::ChainedError;
    ///
    /// let sentinel = ChainedError::new("not found");
    /// assert!(ChainedError::new("not found").is(&sentinel));
    /// assert!(!ChainedError::new("timed out").is(&sentinel));
    /// ```
    #[must_use]
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        match target.downcast_ref::<ChainedError>() {
            Some(target) => self.message == target.message,
            None => self.message == target.to_string(),
        }
    }
}

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(
                f,
                "{}:{}\n\tError: {}\n\n",
                location.file(),
                location.line(),
                self.message
            )?,
            None => write!(f, "\tError: {}\n\n", self.message)?,
        }
        match self.cause.as_deref() {
            Some(cause) => {
                let cause: &(dyn Error + 'static) = cause;
                // A cause counts as chained if any link of its own source
                // chain is a ChainedError, so wrappers that forward their
                // source are rendered through rather than as a leaf.
                if crate::chain::downcast_ref::<ChainedError>(cause).is_some() {
                    write!(f, "{cause}")
                } else {
                    write!(f, "\tError: {cause}\n\n")
                }
            }
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Error for ChainedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}
