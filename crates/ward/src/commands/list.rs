//! `ward list` -- list all beds.

use anyhow::Result;
use chrono::Utc;

use ward_query::list_all;

use crate::commands::load_or_empty;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_bed_table};

/// Execute the `ward list` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let (store, _session) = ctx.open_store()?;
    let registry = load_or_empty(ctx, &store);
    let rows = list_all(&registry, Utc::now());

    if ctx.json {
        output_json(&rows);
    } else if rows.is_empty() {
        if !ctx.quiet {
            println!("No beds registered. Run `ward add <number>` to register one.");
        }
    } else {
        print_bed_table(&rows);
    }
    Ok(())
}
