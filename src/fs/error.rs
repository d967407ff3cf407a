use std::fmt::{self, Formatter};
use std::io;

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::mode::ModeError;

/// An error reported by the OS through `errno`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsError(pub c_int);

impl OsError {
    pub const fn code(&self) -> c_int {
        self.0
    }

    pub fn kind(&self) -> io::ErrorKind {
        io::Error::from_raw_os_error(self.0).kind()
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", io::Error::from_raw_os_error(self.0))
    }
}

impl std::error::Error for OsError {}

impl From<OsError> for io::Error {
    fn from(value: OsError) -> Self {
        io::Error::from_raw_os_error(value.0)
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("options record contains no mode")]
pub struct MissingModeError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains an interior nul byte")]
pub struct InvalidTargetError;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum StreamOpenError {
    Mode(ModeError),
    MissingMode(MissingModeError),
    InvalidTarget(InvalidTargetError),
    Os(OsError),
}
