//! Commonly used items for convenient importing.
//!
//! Re-exports the pieces that show up at nearly every call site: the error
//! type, the `Result` alias, the construction macros, and [`ResultExt`].
//!
//! # Usage
//!
//! ```
//! use causelink::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32> {
//!     if b == 0 {
//!         bail!("cannot divide by zero");
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert!(divide(1, 0).is_err());
//! ```

pub use crate::{ChainedError, Result, ResultExt, bail, newf, wrapf};
