//! `ward release` -- release the patient from a bed.

use anyhow::Result;

use ward_core::BedId;

use crate::cli::BedArgs;
use crate::commands::{ensure_staff, load_or_empty, save_or_report};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `ward release` command.
pub fn run(ctx: &RuntimeContext, args: &BedArgs) -> Result<()> {
    let (store, session) = ctx.open_store()?;
    ensure_staff(&session)?;

    let id = BedId::parse(&args.id)?;
    let mut registry = load_or_empty(ctx, &store);
    let dwell = registry.release(&id)?;
    save_or_report(&store, &registry);

    if ctx.json {
        output_json(&serde_json::json!({
            "id": id.as_str(),
            "status": "ready",
            "dwell": dwell,
        }));
    } else if !ctx.quiet {
        println!("Bed {} released after {}", id, dwell);
    }
    Ok(())
}
