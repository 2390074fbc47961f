//! `ward remove` -- delete a bed.

use anyhow::Result;

use ward_core::BedId;

use crate::cli::BedArgs;
use crate::commands::{ensure_staff, load_or_empty, save_or_report};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `ward remove` command.
pub fn run(ctx: &RuntimeContext, args: &BedArgs) -> Result<()> {
    let (store, session) = ctx.open_store()?;
    ensure_staff(&session)?;

    let id = BedId::parse(&args.id)?;
    let mut registry = load_or_empty(ctx, &store);
    registry.remove(&id)?;
    save_or_report(&store, &registry);

    if ctx.json {
        output_json(&serde_json::json!({ "id": id.as_str(), "removed": true }));
    } else if !ctx.quiet {
        println!("Removed bed {}", id);
    }
    Ok(())
}
