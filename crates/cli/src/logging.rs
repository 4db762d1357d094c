use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Console level; `RUST_LOG` directives still take precedence.
pub const LEVEL_ENV: &str = "VAULT2HEXO_LOG";
/// Optional path of an extra log file.
pub const FILE_ENV: &str = "VAULT2HEXO_LOG_FILE";
/// Level for the log file, defaults to debug.
pub const FILE_LEVEL_ENV: &str = "VAULT2HEXO_LOG_FILE_LEVEL";

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub file_level: Option<String>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var(LEVEL_ENV).ok(),
            file: env::var_os(FILE_ENV).filter(|v| !v.is_empty()).map(PathBuf::from),
            file_level: env::var(FILE_LEVEL_ENV).ok(),
        }
    }
}

pub fn init(cfg: &LoggingConfig) {
    let stdout_level =
        cfg.level.as_deref().and_then(parse_level).unwrap_or(LevelFilter::INFO);

    let stdout_filter =
        EnvFilter::builder().with_default_directive(stdout_level.into()).from_env_lossy();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(stdout_filter);

    let registry = tracing_subscriber::registry().with(stdout_layer);

    if let Some(ref path) = cfg.file {
        let file_level =
            cfg.file_level.as_deref().and_then(parse_level).unwrap_or(LevelFilter::DEBUG);

        let file_filter = EnvFilter::builder()
            .with_default_directive(file_level.into())
            .from_env_lossy();

        let file = File::create(path).unwrap_or_else(|e| {
            eprintln!("Failed to create log file {}: {}", path.display(), e);

            std::process::exit(1);
        });

        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        // Keep the file writer alive until exit
        if let Ok(mut g) = LOG_GUARD.lock() {
            *g = Some(guard);
        }

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(file_filter);

        registry.with(file_layer).init();
    } else {
        registry.init();
    }
}

/// Drop the file writer guard so buffered lines reach the log file.
pub fn flush() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
