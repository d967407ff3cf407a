//! Open files by intent rather than by mode string.
//!
//! Instead of remembering whether appending with read access is `"a+"` or `"+a"`, or where the `b`
//! goes, callers describe what they want with a handful of [`ModeSymbol`](mode::ModeSymbol)s:
//!
//! ```
//! use symbolic_open::mode::{ModeSet, ModeSymbol::*};
//!
//! let mode = ModeSet::from([Binary, Append, Read]).translate().unwrap();
//! assert_eq!(mode, "ba+");
//! ```
//!
//! # Structure
//! - [`mode`] holds the symbols, the set they're collected into and the translation itself. It's
//!   pure, with no I/O and no state.
//! - [`options`] merges a translated mode into an [`OptionsRecord`](options::OptionsRecord),
//!   stripping the deprecated `binmode` and `textmode` keys on the way.
//! - [`open`] forwards the merged record to anything implementing
//!   [`Opener`](open::Opener). The crate doesn't care what that is.
//! - `fs` (Linux only, behind the `fs` feature) provides one such opener on top of C stdio, so
//!   the modes can be used for real files.
//!
//! # Error Handling
//! Errors are strongly typed. Leaf errors are their own types, often ZSTs, and are combined with
//! enums for static dispatch. A conflicting set of symbols is a [`ConflictError`](mode::ConflictError)
//! and is never silently resolved. Errors from an opener pass through [`open`] untouched.
//!
//! # Logging
//! Translation and open calls emit [`tracing`] events at the `debug` level. No subscriber is
//! installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod mode;
pub mod open;
pub mod options;

#[cfg(feature = "fs")]
pub mod fs;

pub(crate) mod util;
