//! Symbolic access intents and their translation into native open-mode strings.

mod error;
mod set;
mod string;
mod symbol;
mod translate;

mod tests;

pub use error::*;
pub use set::*;
pub use string::*;
pub use symbol::*;
pub use translate::*;
