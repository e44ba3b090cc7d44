//! JSON emission for extracted directives.

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use crate::error::CliError;

/// Serialize directives as a compact JSON array of strings.
///
/// Without a destination the array goes to stdout; with one, the file is
/// opened in create-or-truncate mode. The handle is closed when it leaves
/// scope, on success and error paths alike.
pub(crate) fn write_json(
    directives: &[String],
    destination: Option<&Path>,
) -> Result<(), CliError> {
    match destination {
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer(&mut handle, directives)?;
            handle.flush()?;
        }
        Some(path) => {
            let file = File::create(path)?;
            serde_json::to_writer(file, directives)?;
        }
    }
    Ok(())
}
