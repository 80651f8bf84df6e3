mod args;
mod context;
pub mod prompts;
pub mod quiet;

pub use args::Cli;
pub use context::run;
