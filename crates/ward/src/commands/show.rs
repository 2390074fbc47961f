//! `ward show` -- show one bed in detail.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use ward_core::BedId;
use ward_query::{BedHistoryView, BedRow};

use crate::cli::BedArgs;
use crate::commands::load_or_empty;
use crate::context::RuntimeContext;
use crate::output::{format_bed_detail, format_history_line, output_json};

/// JSON view for `ward show`: current state plus the transition log.
#[derive(Serialize)]
struct BedDetail {
    #[serde(flatten)]
    row: BedRow,
    history: Vec<ward_query::HistoryRow>,
}

/// Execute the `ward show` command.
pub fn run(ctx: &RuntimeContext, args: &BedArgs) -> Result<()> {
    let (store, _session) = ctx.open_store()?;
    let registry = load_or_empty(ctx, &store);

    let id = BedId::parse(&args.id)?;
    let bed = registry.get(&id)?;
    let row = BedRow::from_bed(bed, Utc::now());
    let history = BedHistoryView::from_bed(bed).history;

    if ctx.json {
        output_json(&BedDetail { row, history });
    } else {
        println!("{}", format_bed_detail(&row));
        if !history.is_empty() {
            println!();
            println!("HISTORY");
            for entry in &history {
                println!("  {}", format_history_line(entry));
            }
        }
    }
    Ok(())
}
