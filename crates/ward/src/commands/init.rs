//! `ward init` -- initialize a ward in the current directory.

use std::env;

use anyhow::{Context, Result, bail};

use ward_config::{WardConfig, ensure_ward_dir, save_config};
use ward_core::{BedId, BedRegistry};
use ward_storage::JsonStore;

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `ward init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let base = match ctx.dir {
        Some(ref dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };
    let ward_dir = base.join(".ward");

    // Safety guard: refuse double-init unless --force.
    if !args.force && ward_dir.is_dir() {
        let config_path = ward_dir.join("config.yaml");
        let default_beds = ward_dir.join("beds.json");
        if config_path.exists() || default_beds.exists() {
            bail!(
                "Found an existing ward in {}\n\n\
                This directory is already initialized.\n\n\
                To use the existing ward:\n  \
                Just run ward commands normally (e.g., ward list)\n\n\
                Or use --force to re-initialize.",
                ward_dir.display()
            );
        }
    }

    let ward_dir = ensure_ward_dir(&ward_dir)?;

    let config = WardConfig::default();
    save_config(&ward_dir, &config)?;

    // Seed the initial beds, numbered from 1.
    let mut registry = BedRegistry::new();
    for n in 1..=args.beds {
        registry.add(BedId::parse(&n.to_string())?)?;
    }
    let store = JsonStore::new(config.data_path(&ward_dir));
    store.save(&registry)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "ward_dir": ward_dir.display().to_string(),
            "beds": registry.len(),
        }));
    } else if !ctx.quiet {
        println!();
        println!("ward initialized successfully!");
        println!();
        println!("  Directory: {}", ward_dir.display());
        println!("  Beds seeded: {}", registry.len());
        println!();
        println!("Run `ward list` to see the beds.");
        println!();
    }

    Ok(())
}
