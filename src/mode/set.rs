use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use super::{ConflictError, InvalidSymbolError, ModeString, ModeSymbol, translate};

/// An unordered, duplicate-free collection of [`ModeSymbol`]s, stored as one bit per symbol.
///
/// Because the set only records presence, the order and multiplicity of the symbols it was built
/// from can't affect anything derived from it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModeSet {
    pub(crate) bits: u8,
}

macro_rules! set_bit {
    ($self:ident, $value:expr, $bit:expr) => {
        if $value {
            $self.bits |= $bit;
        } else {
            $self.bits &= !$bit;
        }
    };
}

macro_rules! get_bit {
    ($self:ident, $bit:expr) => {
        $self.bits & $bit != 0
    };
}

impl ModeSet {
    pub const fn new() -> ModeSet {
        ModeSet { bits: 0 }
    }

    /// Returns a copy of this set with `symbol` added, for use in const contexts and chains.
    pub const fn with(mut self, symbol: ModeSymbol) -> ModeSet {
        set_bit!(self, true, symbol.bit());
        self
    }

    /// Adds `symbol` to the set, returning true if it wasn't already present.
    pub const fn insert(&mut self, symbol: ModeSymbol) -> bool {
        let added = !self.contains(symbol);
        set_bit!(self, true, symbol.bit());
        added
    }

    /// Removes `symbol` from the set, returning true if it was present.
    pub const fn remove(&mut self, symbol: ModeSymbol) -> bool {
        let removed = self.contains(symbol);
        set_bit!(self, false, symbol.bit());
        removed
    }

    pub const fn contains(&self, symbol: ModeSymbol) -> bool {
        get_bit!(self, symbol.bit())
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn iter(&self) -> Iter {
        Iter {
            set: *self,
            index: 0,
        }
    }

    /// Builds a set from symbol names, failing on the first name that isn't a [`ModeSymbol`].
    pub fn parse<I>(names: I) -> Result<ModeSet, InvalidSymbolError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names.into_iter().map(|name| name.as_ref().parse::<ModeSymbol>()).collect()
    }

    /// Translates this set into a mode string. See [`translate`].
    pub fn translate(self) -> Result<ModeString, ConflictError> {
        translate(self)
    }
}

impl Debug for ModeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<ModeSymbol> for ModeSet {
    fn from_iter<T: IntoIterator<Item = ModeSymbol>>(iter: T) -> Self {
        let mut set = ModeSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<ModeSymbol> for ModeSet {
    fn extend<T: IntoIterator<Item = ModeSymbol>>(&mut self, iter: T) {
        for symbol in iter {
            self.insert(symbol);
        }
    }
}

impl<const N: usize> From<[ModeSymbol; N]> for ModeSet {
    fn from(value: [ModeSymbol; N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for ModeSet {
    type Item = ModeSymbol;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ModeSet {
    type Item = ModeSymbol;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over the symbols in a [`ModeSet`] in declaration order.
#[derive(Debug, Clone)]
pub struct Iter {
    set: ModeSet,
    index: usize,
}

impl Iterator for Iter {
    type Item = ModeSymbol;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&symbol) = ModeSymbol::ALL.get(self.index) {
            self.index += 1;
            if self.set.contains(symbol) {
                return Some(symbol);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ModeSymbol::ALL
            .get(self.index..)
            .map_or(0, |rest| rest.iter().filter(|s| self.set.contains(**s)).count());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}
