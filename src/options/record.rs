use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::{self, Debug, Formatter};

use super::OptionValue;
use crate::mode::ModeString;

/// The key under which the translated mode string is stored.
pub const MODE_KEY: &str = "mode";

/// An encoding hint, passed through to the collaborator untouched.
pub const ENCODING_KEY: &str = "encoding";

/// The encoding the target's contents are stored in. Passed through untouched.
pub const EXTERNAL_ENCODING_KEY: &str = "external_encoding";

/// The encoding read data is converted to. Passed through untouched.
pub const INTERNAL_ENCODING_KEY: &str = "internal_encoding";

/// Whether a descriptor target is closed together with the resource. Passed through, but the
/// stdio opener always takes ownership of an `OwnedFd` and closes it, so
/// it has no effect there.
pub const AUTOCLOSE_KEY: &str = "autoclose";

/// Keys superseded by mode symbols. They are stripped and never reach an open call.
pub const DEPRECATED_KEYS: [&str; 2] = ["binmode", "textmode"];

/// The options passed alongside a target to an [`Opener`](crate::open::Opener).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OptionsRecord {
    entries: BTreeMap<String, OptionValue>,
}

impl OptionsRecord {
    pub fn new() -> OptionsRecord {
        OptionsRecord::default()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&OptionValue>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key)
    }

    /// Inserts a value, returning the one previously stored under `key`, if any.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<OptionValue>
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<OptionValue>
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all options in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, OptionValue> {
        self.entries.iter()
    }

    /// Returns the translated mode, if this record has been through
    /// [`build_options`](super::build_options).
    pub fn mode(&self) -> Option<ModeString> {
        self.get(MODE_KEY).and_then(OptionValue::as_mode)
    }

    pub fn encoding(&self) -> Option<&str> {
        self.get(ENCODING_KEY).and_then(OptionValue::as_str)
    }
}

impl Debug for OptionsRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionsRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        OptionsRecord {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<OptionValue>, const N: usize> From<[(K, V); N]> for OptionsRecord {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for OptionsRecord {
    type Item = (String, OptionValue);
    type IntoIter = btree_map::IntoIter<String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionsRecord {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = btree_map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
