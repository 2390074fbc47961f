//! `ward occupy` -- place a patient in a bed.

use anyhow::Result;

use ward_core::BedId;

use crate::cli::OccupyArgs;
use crate::commands::{ensure_staff, load_or_empty, save_or_report};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `ward occupy` command.
pub fn run(ctx: &RuntimeContext, args: &OccupyArgs) -> Result<()> {
    let (store, session) = ctx.open_store()?;
    ensure_staff(&session)?;

    let id = BedId::parse(&args.id)?;
    let mut registry = load_or_empty(ctx, &store);
    registry.occupy(&id, args.patient.trim())?;
    save_or_report(&store, &registry);

    if ctx.json {
        output_json(&serde_json::json!({
            "id": id.as_str(),
            "status": "occupied",
            "patient": args.patient.trim(),
        }));
    } else if !ctx.quiet {
        println!("Bed {} occupied by {}", id, args.patient.trim());
    }
    Ok(())
}
