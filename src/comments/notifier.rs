use super::event::PackageEvent;
use super::store::CommentStore;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Indentation for notices, so they sit under the host's per-package output.
pub const NOTICE_INDENT: &str = "    ";

/// Notice for a package event, or `None` when the package has no comment.
pub fn on_package_event(event: &PackageEvent, store: &CommentStore) -> Option<String> {
    let package = event.package();
    if !store.has(package) {
        return None;
    }
    let comment = store.get(package).unwrap_or_default();

    tracing::debug!(operation = event.operation(), package, "comment found for event");
    Some(format!("Comment found for package {package}: {comment}"))
}

/// Process a stream of JSON-encoded events, one per line, writing one
/// indented notice per event that has a comment. Blank lines are skipped.
///
/// Stops at the first line that is not a valid event. Returns the number of
/// notices written.
pub fn notify_stream<R: BufRead, W: Write>(
    input: R,
    store: &CommentStore,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read package event")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = PackageEvent::from_json(line)
            .with_context(|| format!("package event on line {}", idx + 1))?;

        if let Some(notice) = on_package_event(&event, store) {
            writeln!(out, "{NOTICE_INDENT}{notice}")?;
            written += 1;
        }
    }

    Ok(written)
}
