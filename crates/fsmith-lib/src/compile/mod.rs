//! Postfix tokens to Thompson NFA.
//!
//! Each token is processed exactly once against a stack of fragments:
//! literals push, operators pop their operands and push the combined
//! fragment. A well-formed stream leaves exactly one fragment behind.

mod thompson;


pub use thompson::{compile, compile_postfix};
