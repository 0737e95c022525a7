//! `env_logger` setup.
//!
//! The browser owns the terminal, so its logs go to a file in the cache
//! directory. Every other command logs to stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

/// Filter directives are read from this variable.
pub const LOG_ENV: &str = "SECTORA_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "sectora.log";

fn builder() -> Builder {
	Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_FILTER))
}

/// Log to stderr.
pub fn init_stderr() {
	let _ = builder().target(Target::Stderr).try_init();
}

/// Log to `<cache dir>/sectora.log`, returning the file path.
///
/// Logging is optional for the browser: when the file cannot be opened a
/// warning is printed before the terminal is taken over and no logger is
/// installed.
pub fn init_file() -> Option<PathBuf> {
	match app_dirs::get_cache_dir().and_then(|dir| open_log_file(&dir)) {
		Ok((path, file)) => {
			let _ = builder().target(Target::Pipe(Box::new(file))).try_init();
			Some(path)
		}
		Err(err) => {
			eprintln!("warning: file logging disabled: {err:#}");
			None
		}
	}
}

fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create cache directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;
	Ok((path, file))
}
