//! Languages command handler - Supported language identifiers

use std::fmt::Write;

use serde_json::json;
use tracing::debug;

use crate::commands::CommandContext;
use crate::error::{CorpusError, Result};
use crate::lang::Lang;

/// Run the languages command
///
/// Lists every language identifier with its extensions. When a corpus root
/// exists, also shows how many fixtures each language has; a root that
/// exists but cannot be read is an error.
pub fn run_languages(ctx: &CommandContext) -> Result<String> {
    let corpus = match ctx.open_corpus() {
        Ok(corpus) => Some(corpus),
        Err(e @ (CorpusError::FileNotFound { .. } | CorpusError::NotADirectory { .. })) => {
            debug!("no corpus root, listing languages only: {}", e);
            None
        }
        Err(e) => return Err(e),
    };

    let rows: Vec<(Lang, Option<usize>)> = Lang::ALL
        .iter()
        .map(|&lang| {
            let count = corpus.as_ref().map(|c| c.fixtures(lang).len());
            (lang, count)
        })
        .collect();

    let value = json!({
        "languages": rows
            .iter()
            .map(|(lang, count)| json!({
                "id": lang.name(),
                "name": lang.display_name(),
                "extensions": lang.extensions(),
                "fixtures": count,
            }))
            .collect::<Vec<_>>(),
    });

    ctx.render(&value, || {
        let mut out = String::new();
        for (lang, count) in &rows {
            let fixtures = count.map(|n| format!("{:>3} fixture(s)", n)).unwrap_or_default();
            let _ = writeln!(
                out,
                "{:<12} {:<12} {:<28} {}",
                lang.name(),
                lang.display_name(),
                lang.extensions().iter().map(|e| format!(".{}", e)).collect::<Vec<_>>().join(" "),
                fixtures
            );
        }
        out
    })
}
