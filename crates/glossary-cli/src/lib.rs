pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

pub use commands::run;
pub use config::{Cli, Commands};
