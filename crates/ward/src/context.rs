//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs:
//! the resolved ward directory, the session credentials, and the global
//! flags. Construction is cheap; the ward directory and config are only
//! touched when a command asks for them.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use ward_config::{Session, WardConfig, find_ward_dir, load_config};
use ward_storage::JsonStore;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit ward directory override, if given.
    pub dir: Option<PathBuf>,

    /// Resolved user name for login and reporting.
    pub user: String,

    /// Password supplied for login, if any.
    pub password: Option<String>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Resolves the user name with the priority chain:
    /// `--user` flag > `WARD_USER` env > `$USER` > `"anonymous"`.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            dir: global.dir.as_ref().map(PathBuf::from),
            user: resolve_user(global.user.as_deref()),
            password: global.password.clone(),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Returns the `.ward/` directory, honoring the `--dir` override and
    /// falling back to upward discovery from the current directory.
    pub fn resolve_ward_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.dir {
            let candidate = if dir.ends_with(".ward") {
                dir.clone()
            } else {
                dir.join(".ward")
            };
            anyhow::ensure!(
                candidate.is_dir(),
                "no ward found at {} (run 'ward init' there first)",
                candidate.display()
            );
            return Ok(candidate);
        }
        let cwd = env::current_dir().context("failed to get current directory")?;
        let found = find_ward_dir(&cwd)
            .context("no .ward directory found. Run 'ward init' to create one.")?;
        debug!(dir = %found.display(), "resolved ward directory");
        Ok(found)
    }

    /// Loads the config and resolves a session for this invocation.
    pub fn login(&self, ward_dir: &std::path::Path) -> Result<(WardConfig, Session)> {
        let config = load_config(ward_dir)
            .with_context(|| format!("failed to load config from {}", ward_dir.display()))?;
        let session = Session::login(&config, &self.user, self.password.as_deref())?;
        Ok((config, session))
    }

    /// Opens the bed store for the resolved ward.
    pub fn open_store(&self) -> Result<(JsonStore, Session)> {
        let ward_dir = self.resolve_ward_dir()?;
        let (config, session) = self.login(&ward_dir)?;
        Ok((JsonStore::new(config.data_path(&ward_dir)), session))
    }
}

/// Resolves the user name using the priority chain.
///
/// Priority: explicit flag > `WARD_USER` env (folded into the flag by
/// clap) > `$USER` > `"anonymous"`.
fn resolve_user(flag_value: Option<&str>) -> String {
    if let Some(user) = flag_value {
        if !user.is_empty() {
            return user.to_string();
        }
    }
    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        if !user.is_empty() {
            return user;
        }
    }
    "anonymous".to_string()
}
