//! Command-line surface of `tip-split` and the decisions taken from it:
//! which commands the field flags stand for, which mode to run in, and how
//! flags, `RUST_LOG` and the config file combine.

use std::path::PathBuf;

use clap::Parser;
use tip_core::PresetTip;

use crate::command::Command;
use crate::config::{Config, ConfigError};
use crate::logging::parse_filter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Split a bill and its tip between a group of people.
///
/// With any of --bill, --tip, --custom-tip or --people the values are
/// entered into the form and the result is printed once. Without them (or
/// with --interactive) commands are read from stdin.
#[derive(Debug, Parser)]
#[command(name = "tip-split")]
pub struct Cli {
    /// Bill field text, e.g. `123.45`. Digits are read as cents.
    #[arg(long)]
    pub bill: Option<String>,

    /// Preset tip percentage.
    #[arg(long, value_parser = parse_preset, conflicts_with = "custom_tip")]
    pub tip: Option<PresetTip>,

    /// Custom tip percentage, clamped to 1-100.
    #[arg(long)]
    pub custom_tip: Option<String>,

    /// Number of people, clamped to 1-100.
    #[arg(long)]
    pub people: Option<String>,

    /// Read commands from stdin after applying any field flags.
    #[arg(long, short)]
    pub interactive: bool,

    /// TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, overriding the config file and `RUST_LOG`.
    #[arg(long, value_parser = parse_log_level)]
    pub log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// How the binary runs after the field flags are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the form once and exit.
    OneShot,
    /// Read session commands from stdin.
    Interactive,
}

impl Cli {
    /// Field flags as the commands a user would have typed, in form order.
    pub fn field_commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(bill) = &self.bill {
            commands.push(Command::Bill(bill.clone()));
        }
        if let Some(preset) = self.tip {
            commands.push(Command::Tip(preset));
        }
        if let Some(custom) = &self.custom_tip {
            commands.push(Command::Custom(custom.clone()));
        }
        if let Some(people) = &self.people {
            commands.push(Command::People(people.clone()));
        }
        commands
    }

    pub fn mode(&self) -> Mode {
        let has_fields = self.bill.is_some()
            || self.tip.is_some()
            || self.custom_tip.is_some()
            || self.people.is_some();
        if self.interactive || !has_fields {
            Mode::Interactive
        } else {
            Mode::OneShot
        }
    }

    /// Loads the config file (or the defaults) and applies `--log-file` on
    /// top. The log level is resolved separately by [`Cli::log_directive`].
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_or_default(self.config.as_deref())?;
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        Ok(config)
    }

    /// The filter to install: `--log-level`, then a non-blank `RUST_LOG`
    /// value, then the config's `log_level`.
    pub fn log_directive(
        &self,
        config: &Config,
        rust_log: Option<&str>,
    ) -> String {
        if let Some(level) = &self.log_level {
            return level.clone();
        }
        match rust_log.map(str::trim) {
            Some(env) if !env.is_empty() => env.to_string(),
            _ => config.log_level.clone(),
        }
    }
}

fn parse_preset(s: &str) -> Result<PresetTip, String> {
    PresetTip::parse(s).ok_or_else(|| format!("'{s}' is not one of 5, 10, 15, 25, 50"))
}

fn parse_log_level(s: &str) -> Result<String, String> {
    parse_filter(s).map(|_| s.to_string()).map_err(|e| e.to_string())
}
