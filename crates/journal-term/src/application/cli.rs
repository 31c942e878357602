#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use strum::IntoEnumIterator;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::StoreName;

pub const ARG_LOG_LEVEL: &str = "log-level";
pub const ARG_LOG_FILE: &str = "log-file";
pub const ARG_DUMP_CONFIG: &str = "dump-config";

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("JOURNAL_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_journal_dir() -> Arg {
    return Arg::new(ConfigKey::JournalDir.to_string())
        .short('d')
        .long(ConfigKey::JournalDir.to_string())
        .num_args(1)
        .help(format!(
            "Directory of YYYY_MM_DD.md journal files [default: {}]",
            Config::default(ConfigKey::JournalDir)
        ));
}

fn arg_store() -> Arg {
    return Arg::new(ConfigKey::Store.to_string())
        .long(ConfigKey::Store.to_string())
        .num_args(1)
        .value_parser(PossibleValuesParser::new(
            StoreName::iter().map(|e| return e.to_string()),
        ))
        .help(format!(
            "Where entries come from [default: {}]",
            Config::default(ConfigKey::Store)
        ));
}

fn arg_side_panel_percent() -> Arg {
    return Arg::new(ConfigKey::SidePanelPercent.to_string())
        .long(ConfigKey::SidePanelPercent.to_string())
        .num_args(1)
        .help(format!(
            "Share of the terminal width used by the side panel, in percent [default: {}]",
            Config::default(ConfigKey::SidePanelPercent)
        ));
}

fn arg_strict() -> Arg {
    return Arg::new(ConfigKey::Strict.to_string())
        .long(ConfigKey::Strict.to_string())
        .num_args(1)
        .value_parser(PossibleValuesParser::new(["true", "false"]))
        .help(format!(
            "Abort on malformed or unreadable journal files instead of skipping them [default: {}]",
            Config::default(ConfigKey::Strict)
        ));
}

pub fn build() -> Command {
    return Command::new("journal")
        .about("Browse and edit journal entries in the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .arg(arg_config_file())
        .arg(arg_journal_dir())
        .arg(arg_store())
        .arg(arg_side_panel_percent())
        .arg(arg_strict())
        .arg(
            Arg::new(ARG_LOG_LEVEL)
                .long(ARG_LOG_LEVEL)
                .num_args(1)
                .default_value("warn")
                .help("Log level written to the log file"),
        )
        .arg(
            Arg::new(ARG_LOG_FILE)
                .long(ARG_LOG_FILE)
                .num_args(1)
                .default_value("journal.log")
                .help("File receiving log output"),
        )
        .arg(
            Arg::new(ARG_DUMP_CONFIG)
                .long(ARG_DUMP_CONFIG)
                .action(ArgAction::SetTrue)
                .help("Print the default config.toml and exit"),
        );
}
