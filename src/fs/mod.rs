//! A C stdio backed [`Opener`](crate::open::Opener), for opening real files with mode symbols.
#![cfg(target_os = "linux")]

mod error;
mod stdio;
mod stream;


pub use error::*;
pub use stdio::*;
pub use stream::*;
