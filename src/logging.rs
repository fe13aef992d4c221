use crate::config::LogConfig;
use color_eyre::Result;
use std::fs::OpenOptions;

/// Route `log` output into the configured file
///
/// The terminal is owned by ratatui for the whole session, so nothing may be
/// written to stderr. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LogConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let env = env_logger::Env::default().default_filter_or(&config.level);
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}
