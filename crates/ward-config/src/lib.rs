//! Configuration and session handling for the ward system.
//!
//! Covers discovery of the `.ward/` metadata directory, the YAML config
//! file inside it, and login against the config's credential table.

pub mod config;
pub mod session;
pub mod ward_dir;

pub use config::{ConfigError, Role, UserEntry, WardConfig, load_config, save_config};
pub use session::{Session, SessionError};
pub use ward_dir::{ensure_ward_dir, find_ward_dir, find_ward_dir_or_error};
