//! The options record handed to an open call, and the builder that merges mode symbols into it.

mod builder;
mod record;
mod value;


pub use builder::*;
pub use record::*;
pub use value::*;
