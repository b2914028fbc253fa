use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{ANCHOR_TAG, BLOCK_MARKER};
use crate::error::{RepairError, RepairResult};

/// Run the layout repair pass against `path`, rewriting the file in place.
///
/// The file must already be valid UTF-8; a decode failure aborts the run.
pub fn run(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let repaired = repair_layout(&content)?;

    fs::write(path, repaired)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    info!("Repaired layout of {}", path.display());
    Ok(())
}

/// Move a block that was appended at end-of-file back inside the form.
///
/// The block runs from the first occurrence of the marker comment to the
/// end of the file and is reinserted immediately before the last anchor tag
/// of the content preceding it. A tail holding duplicate markers moves as
/// one block.
pub fn repair_layout(content: &str) -> RepairResult<String> {
    let marker_at = content.find(BLOCK_MARKER).ok_or(RepairError::MarkerNotFound {
        marker: BLOCK_MARKER,
    })?;
    debug!("found block marker at byte offset {}", marker_at);

    let base = &content[..marker_at];
    let block = &content[marker_at..];

    let anchor_at = base
        .rfind(ANCHOR_TAG)
        .ok_or(RepairError::AnchorNotFound { tag: ANCHOR_TAG })?;
    let pre = &base[..anchor_at];
    let post = &base[anchor_at + ANCHOR_TAG.len()..];

    Ok(format!("{}\n{}\n{}{}", pre, block, ANCHOR_TAG, post))
}
