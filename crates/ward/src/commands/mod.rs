//! Command handlers for the `ward` CLI.
//!
//! Every handler follows the same shape: resolve the store and session,
//! load the registry (falling back to empty when the file is unreadable),
//! run the core operation, save (reporting a failure without aborting),
//! and print either human or JSON output.

pub mod add;
pub mod clean;
pub mod completion;
pub mod history;
pub mod init;
pub mod list;
pub mod maint;
pub mod occupied;
pub mod occupy;
pub mod release;
pub mod remove;
pub mod search;
pub mod show;
pub mod version;

use anyhow::{Result, bail};

use ward_config::Session;
use ward_core::BedRegistry;
use ward_storage::JsonStore;

use crate::context::RuntimeContext;

/// Loads the registry from the store.
///
/// A load failure is a warning, not a fatal error: the command proceeds
/// against an empty registry so the ward keeps operating with a corrupt
/// or unreadable bed file.
pub fn load_or_empty(ctx: &RuntimeContext, store: &JsonStore) -> BedRegistry {
    match store.load() {
        Ok(registry) => registry,
        Err(e) => {
            if !ctx.quiet {
                eprintln!(
                    "Warning: failed to load {}: {} (starting with an empty registry)",
                    store.path().display(),
                    e
                );
            }
            BedRegistry::new()
        }
    }
}

/// Saves the registry to the store.
///
/// A save failure is reported but does not abort: the in-memory state
/// stays authoritative for this invocation.
pub fn save_or_report(store: &JsonStore, registry: &BedRegistry) {
    if let Err(e) = store.save(registry) {
        eprintln!(
            "Warning: failed to save {}: {} (changes were not persisted)",
            store.path().display(),
            e
        );
    }
}

/// Refuses mutating commands for read-only sessions.
pub fn ensure_staff(session: &Session) -> Result<()> {
    if !session.can_mutate() {
        bail!(
            "user {} has read-only access; this command requires the staff role",
            session.user()
        );
    }
    Ok(())
}
