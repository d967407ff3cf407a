use tracing::{debug, trace};

use super::{DEPRECATED_KEYS, MODE_KEY, OptionsRecord};
use crate::mode::{ModeError, ModeSet, ModeSymbol, translate};

/// Merges a set of mode symbols into an options record, ready to be handed to an
/// [`Opener`](crate::open::Opener).
///
/// The deprecated `binmode` and `textmode` keys are removed, the symbols are translated and the
/// result is stored under [`MODE_KEY`], replacing any mode the caller supplied. All other keys are
/// passed through unchanged.
///
/// # Errors
/// Returns a [`ModeError`] if the symbols conflict. No partially built record is returned.
pub fn build_options<I>(modes: I, options: Option<OptionsRecord>) -> Result<OptionsRecord, ModeError>
where
    I: IntoIterator<Item = ModeSymbol>,
{
    let mut options = options.unwrap_or_default();

    for key in DEPRECATED_KEYS {
        if options.remove(key).is_some() {
            trace!(key, "discarded deprecated open option");
        }
    }

    let modes: ModeSet = modes.into_iter().collect();
    let mode = translate(modes)?;
    debug!(?modes, %mode, "translated mode symbols");

    options.insert(MODE_KEY, mode);
    Ok(options)
}
