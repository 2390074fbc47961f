//! `ward history` -- show the transition log.

use anyhow::Result;

use ward_core::BedId;
use ward_query::{BedHistoryView, list_history};

use crate::cli::HistoryArgs;
use crate::commands::load_or_empty;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_bed_history};

/// Execute the `ward history` command.
pub fn run(ctx: &RuntimeContext, args: &HistoryArgs) -> Result<()> {
    let (store, _session) = ctx.open_store()?;
    let registry = load_or_empty(ctx, &store);

    let views: Vec<BedHistoryView> = match &args.id {
        Some(raw) => {
            let id = BedId::parse(raw)?;
            vec![BedHistoryView::from_bed(registry.get(&id)?)]
        }
        None => list_history(&registry),
    };

    if ctx.json {
        output_json(&views);
    } else if views.is_empty() {
        if !ctx.quiet {
            println!("No beds registered.");
        }
    } else {
        for (i, view) in views.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_bed_history(view);
        }
    }
    Ok(())
}
