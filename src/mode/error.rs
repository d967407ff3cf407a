use derive_more::{Display, Error, From, IsVariant};

/// Two mutually exclusive symbols were requested together.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error, IsVariant)]
pub enum ConflictError {
    #[display("binary and text are mutually exclusive")]
    BinaryText,
    #[display("overwrite and append are mutually exclusive")]
    OverwriteAppend,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("invalid mode symbol: {_0}")]
pub struct InvalidSymbolError(#[error(not(source))] pub String);

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ModeError {
    Conflict(ConflictError),
    InvalidSymbol(InvalidSymbolError),
}
