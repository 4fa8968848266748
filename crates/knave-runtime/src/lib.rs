//! Host-side runtime for compiled knave programs.
//!
//! The compiler emits native code whose entry computation produces a
//! single 64 bit tagged word. The emitted program links against this
//! crate and hands that word to [print_result], which decodes the tag
//! bits and writes the value's textual form to stdout.

pub mod internal;
pub mod value;

pub use internal::{error, print_char, print_result};
pub use value::{FatVal, Value};
