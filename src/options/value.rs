use derive_more::{Display, From, IsVariant};

use crate::mode::ModeString;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, IsVariant)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Mode(ModeString),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            OptionValue::Mode(m) => Some(m.as_str()),
            _ => None,
        }
    }

    pub const fn as_mode(&self) -> Option<ModeString> {
        match self {
            OptionValue::Mode(m) => Some(*m),
            _ => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_owned())
    }
}
