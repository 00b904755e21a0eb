//! Document command - Render the certificate or report for a snapshot

use std::path::Path;

use crate::documents::{render_document, DocumentKind};
use crate::errors::Result;
use crate::fs::{read_snapshot, write_text};

/// Render `kind` for the profile in `snapshot`, to `output` or stdout
pub async fn run(
    snapshot: &Path,
    kind: DocumentKind,
    output: Option<&Path>,
    templates: Option<&Path>,
) -> Result<()> {
    let snapshot = read_snapshot(snapshot)?;
    let issued_on = chrono::Local::now().date_naive();
    let text = render_document(kind, &snapshot.profile, issued_on, templates)?;

    match output {
        Some(path) => {
            write_text(path, &text)?;
            tracing::info!(path = %path.display(), kind = ?kind, "document written");
        }
        None => print!("{}", text),
    }

    Ok(())
}
