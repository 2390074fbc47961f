//! `ward occupied` -- list only the occupied beds.

use anyhow::Result;
use chrono::Utc;

use ward_query::list_occupied;

use crate::commands::load_or_empty;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_bed_table};

/// Execute the `ward occupied` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let (store, _session) = ctx.open_store()?;
    let registry = load_or_empty(ctx, &store);
    let rows = list_occupied(&registry, Utc::now());

    if ctx.json {
        output_json(&rows);
    } else if rows.is_empty() {
        println!("No beds occupied.");
    } else {
        print_bed_table(&rows);
    }
    Ok(())
}
