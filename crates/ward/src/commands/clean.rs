//! `ward clean` -- cleaning cycle for a bed.

use anyhow::Result;

use ward_core::BedId;

use crate::cli::{PhaseArgs, PhaseCommand};
use crate::commands::{ensure_staff, load_or_empty, save_or_report};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `ward clean` command.
pub fn run(ctx: &RuntimeContext, args: &PhaseArgs) -> Result<()> {
    let (store, session) = ctx.open_store()?;
    ensure_staff(&session)?;

    let mut registry = load_or_empty(ctx, &store);
    let (id, status, message) = match &args.command {
        PhaseCommand::Start(bed) => {
            let id = BedId::parse(&bed.id)?;
            registry.start_cleaning(&id)?;
            (id, "cleaning", "Cleaning started for bed")
        }
        PhaseCommand::Done(bed) => {
            let id = BedId::parse(&bed.id)?;
            registry.finish_cleaning(&id)?;
            (id, "ready", "Cleaning finished for bed")
        }
    };
    save_or_report(&store, &registry);

    if ctx.json {
        output_json(&serde_json::json!({ "id": id.as_str(), "status": status }));
    } else if !ctx.quiet {
        println!("{} {}", message, id);
    }
    Ok(())
}
