use std::fs::OpenOptions;

use anyhow::Context;
use anyhow::Result;
use clap::ArgMatches;
use journal_term::application::cli;
use journal_term::AppStateProps;
use journal_term::Config;
use journal_term::EntryStore;
use journal_term::EntryStoreManager;
use journal_term::UiConfig;
use log::LevelFilter;

mod session;

fn init_logging(matches: &ArgMatches) -> Result<()> {
    let log_level_filter = matches
        .get_one::<String>(cli::ARG_LOG_LEVEL)
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);

    // The session owns the terminal, so logs go to a file.
    let log_path = matches
        .get_one::<String>(cli::ARG_LOG_FILE)
        .map(String::as_str)
        .unwrap_or("journal.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {log_path}"))?;

    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cmd = cli::build();
    let matches = cmd.clone().get_matches();

    if matches.get_flag(cli::ARG_DUMP_CONFIG) {
        println!("{}", Config::serialize_default(cmd));
        return Ok(());
    }

    init_logging(&matches)?;
    Config::load(cmd, vec![&matches]).await?;
    let ui_config = UiConfig::from_config()?;

    let mut store = EntryStoreManager::from_config()?;
    let report = store
        .load()
        .await
        .with_context(|| format!("Failed to load entries from the {} store", store.name()))?;

    // Shown once the session ends and the alternate screen is gone.
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    log::info!(
        "loaded {} entries, skipped {}",
        report.loaded,
        report.warnings.len()
    );

    session::run(AppStateProps {
        store,
        ui_config,
        warnings: report.warnings,
    })
    .await
}
