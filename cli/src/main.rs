use clap::Parser;
use navstate_cli::commands::{cli, replay};
use navstate_cli::events;
use navstate_core::config::{self, AppConfig, LoggingConfig};
use navstate_core::error::CliError;
use navstate_core::state::NavigationStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg: AppConfig = match args.config.as_deref() {
        Some(path) => config::load_from_path(path)?,
        None => config::load_default()?,
    };
    init_tracing(&cfg.logging).map_err(CliError::Command)?;

    // Composition root: the only place a store is created.
    let store = NavigationStore::with_config(&cfg.navigation);

    let logger = tokio::spawn(events::log_events(store.subscribe_events()));

    let exit = dispatch(args.command, &store)?;

    // Dropping the last store handle closes the channel and ends the logger.
    drop(store);
    if let Ok(summary) = logger.await {
        tracing::debug!(
            logged = summary.logged,
            skipped = summary.skipped,
            "event logger finished"
        );
    }

    Ok(exit)
}

fn dispatch(cmd: cli::Commands, store: &NavigationStore) -> Result<i32, CliError> {
    match cmd {
        cli::Commands::Replay(replay_args) => replay::run_replay(store, &replay_args),
    }
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 12: invalid action
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Action(_) => 12,
        CliError::Command(_) => 50,
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(std::path::PathBuf::from)
            .ok_or_else(|| "file logging needs logging.directory".to_string())?;

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("navstate.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use navstate_core::error::{ActionParseError, ConfigError};

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(exit_code_for_error(&ConfigError::HomeDir.into()), 11);
        assert_eq!(
            exit_code_for_error(&ActionParseError::UnknownAction("jump".into()).into()),
            12
        );
        assert_eq!(exit_code_for_error(&CliError::Command("x".into())), 50);
    }

    #[test]
    fn test_file_logging_without_directory_is_rejected() {
        let logging = LoggingConfig {
            console: false,
            file: true,
            directory: Some(" ".to_string()),
            ..LoggingConfig::default()
        };
        let err = init_tracing(&logging).unwrap_err();
        assert!(err.contains("logging.directory"));
    }
}
