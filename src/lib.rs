//! Password generator with an optional Have I Been Pwned range check.
//!
//! [`pass::Generator`] draws passwords from the enabled character classes
//! using a cryptographically secure source. [`batch::BatchRunner`] repeats
//! that until enough candidates pass the optional [`breach::BreachChecker`].

pub mod batch;
pub mod breach;
pub mod cli;
pub mod error;
pub mod logger;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use batch::{BatchReport, BatchRequest, BatchRunner};
pub use breach::{BreachChecker, BreachStatus, PwnedPasswordsClient};
pub use error::{Error, Result};
pub use pass::{CharClasses, Generator, Password};
