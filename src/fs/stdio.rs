use std::ffi::CString;
use std::os::fd::{FromRawFd, IntoRawFd, OwnedFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::{InvalidTargetError, MissingModeError, OsError, Stream, StreamOpenError};
use crate::mode::ModeString;
use crate::open::Opener;
use crate::options::OptionsRecord;
use crate::util;

/// Opens [`Stream`]s through the C standard library.
///
/// Paths are opened with `fopen` and already open descriptors are adopted with `fdopen`. Only the
/// `mode` option is interpreted, everything else in the [`OptionsRecord`] is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdio;

impl Stdio {
    fn stdio_mode(options: &OptionsRecord) -> Result<ModeString, MissingModeError> {
        options.mode().map(|mode| mode.stdio()).ok_or(MissingModeError)
    }
}

impl<'a> Opener<&'a Path> for Stdio {
    type Resource = Stream;
    type Error = StreamOpenError;

    fn open_raw(&self, target: &'a Path, options: &OptionsRecord) -> Result<Stream, StreamOpenError> {
        let mode = Stdio::stdio_mode(options)?;
        let pathname = CString::new(target.as_os_str().as_bytes()).map_err(|_| InvalidTargetError)?;

        // SAFETY: Both arguments are valid nul-terminated strings that outlive the call.
        let file = unsafe { libc::fopen(pathname.as_ptr(), mode.as_c_str().as_ptr()) };
        match Stream::from_raw(file) {
            Some(stream) => Ok(stream),
            None => Err(OsError(util::fs::err_no()))?,
        }
    }
}

impl Opener<OwnedFd> for Stdio {
    type Resource = Stream;
    type Error = StreamOpenError;

    fn open_raw(&self, target: OwnedFd, options: &OptionsRecord) -> Result<Stream, StreamOpenError> {
        let mode = Stdio::stdio_mode(options)?;
        let fd = target.into_raw_fd();

        // SAFETY: fd is open and owned here, the mode is a valid nul-terminated string.
        let file = unsafe { libc::fdopen(fd, mode.as_c_str().as_ptr()) };
        match Stream::from_raw(file) {
            Some(stream) => Ok(stream),
            None => {
                let err = util::fs::err_no();
                // SAFETY: fdopen failed, so ownership of fd was never transferred to a stream.
                drop(unsafe { OwnedFd::from_raw_fd(fd) });
                Err(OsError(err))?
            },
        }
    }
}
