pub mod dot;
pub mod dump;
pub mod expr_loader;
pub mod matching;
pub mod postfix;
