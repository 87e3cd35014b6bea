pub mod commands;
pub mod display;
pub mod inspect;

pub use commands::{CliArgs, Commands};
