use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write `text` to `path`, or to stdout when no path is given.
/// A trailing newline is added on stdout only.
pub fn write_output(
    text: &str,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, text)
            .with_context(|| format!("Failed to write output file {}", p.display())),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{text}").context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")
        }
    }
}
