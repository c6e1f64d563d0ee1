//! Show command handler - One fixture's metadata or raw bytes

use std::io::Write as _;

use serde_json::json;

use crate::cli::ShowArgs;
use crate::commands::{format_bytes, CommandContext};
use crate::error::{CorpusError, Result};

/// Run the show command
///
/// With `--raw` the fixture bytes are written to stdout unchanged and the
/// returned string is empty.
pub fn run_show(args: &ShowArgs, ctx: &CommandContext) -> Result<String> {
    let corpus = ctx.open_corpus()?;
    let fixture = corpus
        .get(&args.path)
        .ok_or_else(|| CorpusError::FileNotFound {
            path: args.path.display().to_string(),
        })?;

    if args.raw {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(fixture.bytes())?;
        stdout.flush()?;
        return Ok(String::new());
    }

    let summary = fixture.summary();
    let extension_lang = fixture.extension_lang().map(|l| l.name());
    let value = json!({
        "path": summary.path,
        "source": fixture.path().display().to_string(),
        "lang": summary.lang,
        "extension_lang": extension_lang,
        "kind": summary.kind,
        "expectation": fixture.expectation(),
        "bytes": summary.bytes,
        "lines": summary.lines,
        "utf8": fixture.text().is_ok(),
    });

    ctx.render(&value, || {
        format!(
            "path:        {}\nsource:      {}\nlanguage:    {} ({})\nkind:        {}\nsize:        {}, {} lines\nutf8:        {}\n",
            summary.path,
            fixture.path().display(),
            fixture.lang().name(),
            fixture.lang().display_name(),
            summary.kind.name(),
            format_bytes(summary.bytes),
            summary.lines,
            if fixture.text().is_ok() { "yes" } else { "no" },
        )
    })
}
