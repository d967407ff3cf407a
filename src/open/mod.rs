//! Forwarders that translate mode symbols and hand the result to an external open facility.

use std::fmt::Debug;

use tracing::debug;

use crate::mode::{ModeError, ModeSymbol};
use crate::options::{OptionsRecord, build_options};

mod tests;

/// An external facility able to open a resource of some kind, given a target and the options
/// produced by [`build_options`].
///
/// Implementing this for different target types gives both the path-based and the
/// descriptor-based variants of [`open`].
pub trait Opener<T> {
    type Resource;
    /// The facility's own error type, which must be able to carry a translation failure.
    type Error: From<ModeError>;

    fn open_raw(&self, target: T, options: &OptionsRecord) -> Result<Self::Resource, Self::Error>;
}

/// Translates `modes`, merges them into `options` and opens `target` with `opener`.
///
/// # Errors
/// Translation errors are converted into the opener's error type. Errors from the opener itself
/// are returned unchanged.
pub fn open<O, T, I>(
    opener: &O,
    target: T,
    modes: I,
    options: Option<OptionsRecord>,
) -> Result<O::Resource, O::Error>
where
    O: Opener<T>,
    T: Debug,
    I: IntoIterator<Item = ModeSymbol>,
{
    let options = build_options(modes, options)?;
    debug!(?target, mode = ?options.mode(), "opening");
    opener.open_raw(target, &options)
}

/// Like [`open`], but passes the resource to `f` and releases it once `f` is done, whether it
/// returns or unwinds.
///
/// # Errors
/// Same as [`open`]. Failures while releasing the resource are left to its [`Drop`] impl.
pub fn open_with<O, T, I, F, R>(
    opener: &O,
    target: T,
    modes: I,
    options: Option<OptionsRecord>,
    f: F,
) -> Result<R, O::Error>
where
    O: Opener<T>,
    T: Debug,
    I: IntoIterator<Item = ModeSymbol>,
    F: FnOnce(&mut O::Resource) -> R,
{
    let mut resource = open(opener, target, modes, options)?;
    Ok(f(&mut resource))
}
