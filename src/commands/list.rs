//! List command handler - Enumerate fixtures

use std::fmt::Write;

use serde_json::json;

use crate::cli::ListArgs;
use crate::commands::{format_bytes, to_json, CommandContext};
use crate::error::Result;
use crate::fixture::FixtureSummary;

/// Run the list command
pub fn run_list(args: &ListArgs, ctx: &CommandContext) -> Result<String> {
    let mut corpus = ctx.open_corpus()?;
    if let Some(name) = &args.lang {
        corpus = corpus.filter_lang(ctx.parse_lang(name)?);
    }

    let summaries: Vec<FixtureSummary> = corpus.iter().map(|f| f.summary()).collect();
    let languages: Vec<&str> = corpus.languages().map(|l| l.name()).collect();

    let value = json!({
        "root": corpus.root().display().to_string(),
        "languages": languages,
        "fixtures": to_json(&summaries)?,
        "count": summaries.len(),
    });

    ctx.render(&value, || {
        let mut out = String::new();
        for s in &summaries {
            let _ = writeln!(
                out,
                "{:<32} {:<12} {:<14} {:>10} {:>6} lines",
                s.path,
                s.lang.name(),
                s.kind.name(),
                format_bytes(s.bytes),
                s.lines
            );
        }
        let _ = writeln!(
            out,
            "{} fixture(s) in {} language(s)",
            summaries.len(),
            languages.len()
        );
        out
    })
}
