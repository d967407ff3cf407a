#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use derive_more::{Display, Error, From};

use super::*;
use crate::mode::{ConflictError, ModeString, ModeSymbol::*};
use crate::util::panic::assert_panics;

#[derive(Debug, Display, Error)]
#[display("no such target")]
struct MissingTargetError;

#[derive(Debug, Display, From, Error)]
enum RecordingError {
    Mode(ModeError),
    MissingTarget(MissingTargetError),
}

/// Records every open call and counts how many of its resources are still alive.
#[derive(Default)]
struct RecordingOpener {
    calls: RefCell<Vec<(String, OptionsRecord)>>,
    live: Rc<Cell<usize>>,
}

struct Handle {
    mode: ModeString,
    live: Rc<Cell<usize>>,
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl<'t> Opener<&'t str> for RecordingOpener {
    type Resource = Handle;
    type Error = RecordingError;

    fn open_raw(&self, target: &'t str, options: &OptionsRecord) -> Result<Handle, RecordingError> {
        self.calls.borrow_mut().push((target.to_owned(), options.clone()));
        if target == "missing" {
            Err(MissingTargetError)?
        }
        let handle = Handle {
            mode: options.mode().ok_or(MissingTargetError)?,
            live: Rc::clone(&self.live),
        };
        self.live.set(self.live.get() + 1);
        Ok(handle)
    }
}

#[test]
fn test_open_forwards_options() {
    let opener = RecordingOpener::default();
    let handle = open(
        &opener,
        "log.txt",
        [Append, Text],
        Some(OptionsRecord::from([("encoding", "utf-8"), ("textmode", "yes")])),
    )
    .unwrap();

    assert_eq!(handle.mode, "ta");
    let calls = opener.calls.borrow();
    let (target, options) = &calls[0];
    assert_eq!(target, "log.txt");
    assert_eq!(options.encoding(), Some("utf-8"));
    assert!(!options.contains_key("textmode"));
}

#[test]
fn test_open_errors() {
    let opener = RecordingOpener::default();

    let err = open(&opener, "log.txt", [Binary, Text], None).err();
    assert!(
        matches!(err, Some(RecordingError::Mode(ModeError::Conflict(ConflictError::BinaryText)))),
        "Translation errors should surface through the opener's error type."
    );
    assert!(opener.calls.borrow().is_empty(), "The opener shouldn't be called after a conflict.");

    let err = open(&opener, "missing", [Read], None).err();
    assert!(
        matches!(err, Some(RecordingError::MissingTarget(_))),
        "Opener errors should propagate unchanged."
    );

    let err = opener.open_raw("log.txt", &OptionsRecord::new()).err();
    assert!(matches!(err, Some(RecordingError::MissingTarget(_))));
    assert_eq!(opener.live.get(), 0, "A rejected open shouldn't count as a live resource.");
}

#[test]
fn test_open_with_releases() {
    let opener = RecordingOpener::default();

    let mode = open_with(&opener, "data.bin", [Binary, Overwrite, Read], None, |handle| {
        assert_eq!(opener.live.get(), 1);
        handle.mode
    })
    .unwrap();
    assert_eq!(mode, "bw+");
    assert_eq!(opener.live.get(), 0, "The resource should be released after the callback returns.");

    assert_panics!({
        let _ = open_with(&opener, "data.bin", [Read], None, |_| -> u8 { panic!("callback failed") });
    });
    assert_eq!(opener.live.get(), 0, "The resource should be released when the callback panics.");
}
