use std::io;
use std::mem::ManuallyDrop;
use std::os::fd::OwnedFd;
use std::path::Path;
use std::ptr::NonNull;

use libc::FILE;

use super::{OsError, Stdio, StreamOpenError};
use crate::mode::ModeSymbol;
use crate::open;
use crate::util;

const CHUNK: usize = 4096;

/// An open C stdio stream. The stream is closed when dropped, use [`Stream::close`] to observe
/// errors while closing.
#[derive(Debug)]
pub struct Stream {
    file: NonNull<FILE>,
}

impl Stream {
    /// Opens the file at `path` with the given mode symbols and no extra options.
    pub fn open<P, I>(path: P, modes: I) -> Result<Stream, StreamOpenError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = ModeSymbol>,
    {
        open::open(&Stdio, path.as_ref(), modes, None)
    }

    /// Wraps an already open descriptor in a stream using the given mode symbols.
    ///
    /// The requested mode must be compatible with the descriptor's access mode, otherwise the OS
    /// rejects it and the descriptor is closed.
    pub fn from_fd<I>(fd: OwnedFd, modes: I) -> Result<Stream, StreamOpenError>
    where
        I: IntoIterator<Item = ModeSymbol>,
    {
        open::open(&Stdio, fd, modes, None)
    }

    pub(crate) fn from_raw(file: *mut FILE) -> Option<Stream> {
        NonNull::new(file).map(|file| Stream { file })
    }

    fn last_error(&self) -> OsError {
        let err = OsError(util::fs::err_no());
        // SAFETY: self.file is a valid stream until close or drop.
        unsafe { libc::clearerr(self.file.as_ptr()) };
        err
    }

    /// Reads up to `buf.len()` bytes, returning fewer only at the end of the stream.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, OsError> {
        // SAFETY: buf is valid for writes of buf.len() bytes and self.file is a valid stream.
        let count = unsafe { libc::fread(buf.as_mut_ptr().cast(), 1, buf.len(), self.file.as_ptr()) };
        // SAFETY: As above.
        if count < buf.len() && unsafe { libc::ferror(self.file.as_ptr()) } != 0 {
            return Err(self.last_error());
        }
        Ok(count)
    }

    pub fn read_to_end(&mut self) -> Result<Vec<u8>, OsError> {
        let mut out = Vec::new();
        let mut chunk = [0_u8; CHUNK];
        loop {
            match self.read(&mut chunk)? {
                0 => return Ok(out),
                count => out.extend_from_slice(&chunk[..count]),
            }
        }
    }

    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), OsError> {
        // SAFETY: buf is valid for reads of buf.len() bytes and self.file is a valid stream.
        let count = unsafe { libc::fwrite(buf.as_ptr().cast(), 1, buf.len(), self.file.as_ptr()) };
        if count < buf.len() {
            return Err(self.last_error());
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), OsError> {
        // SAFETY: self.file is a valid stream.
        if unsafe { libc::fflush(self.file.as_ptr()) } == libc::EOF {
            return Err(self.last_error());
        }
        Ok(())
    }

    pub fn close(self) -> Result<(), OsError> {
        let this = ManuallyDrop::new(self);
        // SAFETY: fclose invalidates the stream regardless of the outcome, so this method takes
        // ownership of self and skips Drop.
        if unsafe { libc::fclose(this.file.as_ptr()) } == libc::EOF {
            Err(OsError(util::fs::err_no()))?
        }
        Ok(())
    }
}

impl io::Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(Stream::read(self, buf)?)
    }
}

impl io::Write for Stream {
    /// Writes as much of `buf` as the stream accepts. A short write is reported as a count, the
    /// error only surfaces once nothing at all could be written.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for reads of buf.len() bytes and self.file is a valid stream.
        let count = unsafe { libc::fwrite(buf.as_ptr().cast(), 1, buf.len(), self.file.as_ptr()) };
        if count == 0 && !buf.is_empty() {
            Err(self.last_error())?
        }
        Ok(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(Stream::flush(self)?)
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        // SAFETY: The stream isn't used again after this. Errors can't be reported from drop.
        unsafe { libc::fclose(self.file.as_ptr()) };
    }
}
