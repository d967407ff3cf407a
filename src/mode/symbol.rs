use std::str::FromStr;

use derive_more::{Display, IsVariant};

use super::InvalidSymbolError;

/// A single access intent, supplied in place of a raw mode string.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IsVariant)]
pub enum ModeSymbol {
    #[display("read")]
    Read,
    #[display("overwrite")]
    Overwrite,
    #[display("append")]
    Append,
    #[display("binary")]
    Binary,
    #[display("text")]
    Text,
}

impl ModeSymbol {
    /// Every symbol, in declaration order.
    pub const ALL: [ModeSymbol; 5] = [
        ModeSymbol::Read,
        ModeSymbol::Overwrite,
        ModeSymbol::Append,
        ModeSymbol::Binary,
        ModeSymbol::Text,
    ];

    pub(crate) const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl FromStr for ModeSymbol {
    type Err = InvalidSymbolError;

    /// Parses a symbol by name, with or without a leading `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(':').unwrap_or(s) {
            "read" =>      Ok(ModeSymbol::Read),
            "overwrite" => Ok(ModeSymbol::Overwrite),
            "append" =>    Ok(ModeSymbol::Append),
            "binary" =>    Ok(ModeSymbol::Binary),
            "text" =>      Ok(ModeSymbol::Text),
            _ =>           Err(InvalidSymbolError(s.to_owned())),
        }
    }
}
