#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Chained error values with optional call-site capture.
//!
//! ## Overview
//!
//! This crate provides a single error type, [`ChainedError`], for building
//! causal chains of errors: each link carries a human-readable message, an
//! optional source location, and an optional reference to the error it
//! wraps. The wrapped error may be another [`ChainedError`] or any foreign
//! error type, so layered diagnostics ("loading the config failed" wrapping
//! "file not found") never lose the underlying cause.
//!
//! Unlike a plain string, a chain stays inspectable: you can walk it link by
//! link with [`unwrap`], classify it with [`is`], and recover a wrapped
//! concrete error type with [`downcast_ref`].
//!
//! ## Quick Example
//!
//! ```
//! use causelink::prelude::*;
//!
//! fn read_config(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).wrap("failed to read configuration file")
//! }
//!
//! let err = read_config("/nonexistent").unwrap_err();
//! assert!(err.to_string().contains("failed to read configuration file"));
//! ```
//!
//! ## Rendered format
//!
//! Rendering an error (via [`Display`](core::fmt::Display)) produces one
//! block per link, outermost first:
//!
//! ```text
//! src/main.rs:14
//!     Error: failed to read configuration file
//!
//!     Error: No such file or directory (os error 2)
//!
//! ```
//!
//! Each block is the link's message indented by a tab, followed by a blank
//! line. The `file:line` header is only present when location capture was
//! enabled at construction time (see below). A cause whose source chain
//! reaches a [`ChainedError`] — directly, or through wrapper layers that
//! forward [`Error::source`](core::error::Error::source) — is rendered with
//! its own `Display` output appended raw; any other foreign cause is
//! rendered as a single leaf block and the chain is not walked past it.
//!
//! ## Location capture
//!
//! Constructors record the source location of their call site when the
//! process-wide capture mode is enabled via [`set_stack_capture_mode`]. The
//! flag defaults to off and is meant to be set once at startup; toggling it
//! affects subsequent constructions only. Capture uses
//! [`core::panic::Location`] through `#[track_caller]`, so the recorded
//! location is always the caller of the public constructor, never a frame
//! inside this crate.
//!
//! ## Identity by message
//!
//! Two [`ChainedError`] values are considered the same by [`is`] when their
//! messages are equal, regardless of cause chain or capture state. This is a
//! deliberately shallow notion of identity: it lets you build a sentinel
//! once and classify errors by message no matter how deeply they have been
//! wrapped since.
//!
//! ```
//! use causelink::{is, new, wrap};
//!
//! let not_found = new("not found");
//! let err = wrap(new("not found"), "loading user profile");
//! assert!(is(&err, &not_found));
//! ```

extern crate alloc;

#[macro_use]
mod macros;

pub mod prelude;

mod capture;
mod chain;
mod chained;
mod result_ext;

use alloc::borrow::Cow;

pub use self::{
    capture::set_stack_capture_mode,
    chain::{downcast_ref, is, unwrap},
    chained::{BoxedCause, ChainedError},
    result_ext::ResultExt,
};

/// A [`Result`](core::result::Result) type alias where the error defaults to
/// [`ChainedError`].
///
/// # Examples
///
/// ```
/// use causelink::prelude::*;
///
/// fn might_fail() -> causelink::Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T, E = ChainedError> = core::result::Result<T, E>;

/// Creates a root [`ChainedError`] with the given message.
///
/// Free-function form of [`ChainedError::new`]. Captures the call site when
/// capture mode is enabled.
///
/// # Examples
///
/// ```
/// let err = causelink::new("connection refused");
/// assert_eq!(err.message(), "connection refused");
/// ```
#[must_use]
#[track_caller]
pub fn new(message: impl Into<Cow<'static, str>>) -> ChainedError {
    ChainedError::new(message)
}

/// Wraps an existing error with a new message, forming the next link of the
/// chain.
///
/// Free-function form of [`ChainedError::wrap`]. Captures the call site when
/// capture mode is enabled.
///
/// # Examples
///
/// ```
/// let cause = causelink::new("file not found");
/// let err = causelink::wrap(cause, "failed to load settings");
/// assert!(err.to_string().contains("file not found"));
/// ```
#[must_use]
#[track_caller]
pub fn wrap(cause: impl Into<BoxedCause>, message: impl Into<Cow<'static, str>>) -> ChainedError {
    ChainedError::wrap(cause, message)
}

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    use alloc::fmt;
    #[doc(hidden)]
    pub use core::{format_args, result::Result::Err};

    use crate::{BoxedCause, ChainedError};

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[must_use]
    #[track_caller]
    pub fn format_chained(args: fmt::Arguments<'_>) -> ChainedError {
        if let Some(message) = args.as_str() {
            ChainedError::new(message)
        } else {
            ChainedError::new(fmt::format(args))
        }
    }

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[must_use]
    #[track_caller]
    pub fn format_wrapped(cause: impl Into<BoxedCause>, args: fmt::Arguments<'_>) -> ChainedError {
        if let Some(message) = args.as_str() {
            ChainedError::wrap(cause, message)
        } else {
            ChainedError::wrap(cause, fmt::format(args))
        }
    }
}
