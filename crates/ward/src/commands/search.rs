//! `ward search` -- search beds by id, status, or patient.

use anyhow::Result;
use chrono::Utc;

use ward_query::{SearchCriterion, search};

use crate::cli::SearchArgs;
use crate::commands::load_or_empty;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_bed_table};

/// Execute the `ward search` command.
pub fn run(ctx: &RuntimeContext, args: &SearchArgs) -> Result<()> {
    let criterion: SearchCriterion = args.criterion.parse()?;

    let (store, _session) = ctx.open_store()?;
    let registry = load_or_empty(ctx, &store);
    let rows = search(&registry, criterion, &args.value, Utc::now())?;

    if ctx.json {
        output_json(&rows);
    } else if rows.is_empty() {
        println!("No beds matched.");
    } else {
        print_bed_table(&rows);
    }
    Ok(())
}
