pub mod cli;
pub mod command;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use config::{Config, ConfigError};
pub use session::{Flow, Session};
