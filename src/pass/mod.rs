//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::CharClasses;
pub use generate::{Generator, Password};
