//! Export command handler - Write the bundled corpus to disk

use std::fmt::Write;

use serde_json::json;

use crate::bundled;
use crate::cli::ExportArgs;
use crate::commands::CommandContext;
use crate::error::Result;

/// Run the export command
pub fn run_export(args: &ExportArgs, ctx: &CommandContext) -> Result<String> {
    let written = bundled::export(&args.dest, args.force)?;

    let value = json!({
        "dest": args.dest.display().to_string(),
        "written": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
    });

    ctx.render(&value, || {
        let mut out = String::new();
        for path in &written {
            let _ = writeln!(out, "wrote {}", path.display());
        }
        let _ = writeln!(out, "{} fixture(s) exported", written.len());
        out
    })
}
