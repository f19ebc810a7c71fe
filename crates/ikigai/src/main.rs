//! Ikigai entrypoint: parses CLI args, installs logging, enters the
//! terminal, and hands off to the REPL event loop.

mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use ik_terminal::CrosstermBackend;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

/// Ikigai: a terminal REPL for driving LLM agent conversations.
#[derive(Parser, Debug)]
#[command(name = "ikigai", version, about = "Ikigai agent shell")]
struct Args {
    /// Override the tool discovery directories (system, user, project), for
    /// headless testing without touching a real `~/.ikigai`.
    #[arg(long = "tool-dir", num_args = 3, value_names = ["SYSTEM", "USER", "PROJECT"])]
    tool_dirs: Option<Vec<PathBuf>>,

    /// Disable ANSI color output regardless of terminal capability detection.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Override the detected terminal size (cols, rows) — used by headless
    /// integration tests.
    #[arg(long = "size", num_args = 2, value_names = ["COLS", "ROWS"])]
    size: Option<Vec<u16>>,

    /// Path to the log file. Defaults to `ikigai.log` in the current
    /// directory.
    #[arg(long = "log-file", default_value = "ikigai.log")]
    log_file: PathBuf,
}

fn configure_logging(log_file: &std::path::Path) -> Result<Option<WorkerGuard>> {
    let dir = log_file.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| std::path::Path::new("."));
    let filename = log_file.file_name().context("log file path has no filename component")?;
    let file_appender = tracing_appender::rolling::never(dir, filename);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let result = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init();
    Ok(match result {
        Ok(()) => Some(guard),
        Err(_) => None,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(&args.log_file)?;

    let mut backend = CrosstermBackend::new();
    let guard = backend.enter_guard().context("entering terminal raw mode")?;

    let (cols, rows) = match &args.size {
        Some(v) if v.len() == 2 => (v[0], v[1]),
        _ => guard.size().context("querying terminal size")?,
    };

    let tool_dirs = args.tool_dirs.unwrap_or_else(default_tool_dirs);
    let config = repl::ReplConfig {
        width: cols as usize,
        height: rows as usize,
        colors_enabled: !args.no_color,
        system_tool_dir: tool_dirs[0].clone(),
        user_tool_dir: tool_dirs[1].clone(),
        project_tool_dir: tool_dirs[2].clone(),
    };

    tracing::info!(target: "runtime.startup", cols, rows, "ikigai starting");
    repl::run(guard, config)
}

fn default_tool_dirs() -> Vec<PathBuf> {
    let user_home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    vec![
        PathBuf::from("/usr/local/libexec/ikigai/tools"),
        user_home.join(".ikigai/tools"),
        std::env::current_dir().unwrap_or_default().join(".ikigai/tools"),
    ]
}
