use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::UTF_16LE;
use tracing::{debug, info, warn};

use super::{find, rfind, utf16le_bytes, ANCHOR_TAG, BLOCK_MARKER_PREFIX};
use crate::error::{RepairError, RepairResult};

/// Run the encoding repair pass against `path`, rewriting the file in place.
pub fn run(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let content =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let repaired = repair_encoding(&content)?;

    fs::write(path, &repaired)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;
    info!("Repaired encoding of {}", path.display());
    Ok(())
}

/// Normalize a template whose appended tail was written as UTF-16LE.
///
/// The tail starts at the block marker, found either in UTF-16LE byte form
/// (ASCII interleaved with NUL) or already in UTF-8. Everything before the
/// marker is the base; the tail is decoded when needed and spliced back in
/// front of the last anchor tag of the base.
///
/// The split happens at the first marker occurrence and the tail is kept
/// whole, duplicate markers included.
pub fn repair_encoding(content: &[u8]) -> RepairResult<Vec<u8>> {
    let marker_utf16 = utf16le_bytes(BLOCK_MARKER_PREFIX);

    let (base, appended) = if let Some(pos) = find(content, &marker_utf16) {
        debug!("found UTF-16LE block marker at byte offset {}", pos);
        let decoded = decode_utf16le(&content[pos..])?;
        (content[..pos].to_vec(), decoded.into_bytes())
    } else if let Some(pos) = find(content, BLOCK_MARKER_PREFIX.as_bytes()) {
        debug!("found UTF-8 block marker at byte offset {}", pos);
        (content[..pos].to_vec(), content[pos..].to_vec())
    } else {
        return Err(RepairError::MarkerNotFound {
            marker: BLOCK_MARKER_PREFIX,
        });
    };

    let anchor = ANCHOR_TAG.as_bytes();
    let base = ensure_anchor_visible(base)?;
    let split = rfind(&base, anchor).ok_or(RepairError::AnchorNotFound { tag: ANCHOR_TAG })?;
    let pre = &base[..split];
    let post = &base[split + anchor.len()..];

    let mut repaired = Vec::with_capacity(base.len() + appended.len() + 2);
    repaired.extend_from_slice(pre);
    repaired.push(b'\n');
    repaired.extend_from_slice(&appended);
    repaired.push(b'\n');
    repaired.extend_from_slice(anchor);
    repaired.extend_from_slice(post);
    Ok(repaired)
}

/// Return base bytes guaranteed to contain the anchor tag, or fail.
///
/// When the anchor is not visible in the raw bytes, re-decode the base as
/// UTF-8 with a Latin-1 fallback and re-encode it, in case a stray
/// single-byte encoding is hiding the tag. Heuristic, not guaranteed
/// correct; the anchor still being absent afterwards is fatal.
fn ensure_anchor_visible(base: Vec<u8>) -> RepairResult<Vec<u8>> {
    if find(&base, ANCHOR_TAG.as_bytes()).is_some() {
        return Ok(base);
    }

    warn!("anchor tag not visible in base bytes, re-decoding base");
    let text = match std::str::from_utf8(&base) {
        Ok(text) => text.to_string(),
        Err(_) => encoding_rs::mem::decode_latin1(&base).into_owned(),
    };

    if !text.contains(ANCHOR_TAG) {
        return Err(RepairError::AnchorNotFound { tag: ANCHOR_TAG });
    }
    Ok(text.into_bytes())
}

fn decode_utf16le(bytes: &[u8]) -> RepairResult<String> {
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| RepairError::decode_error("UTF-16LE", "malformed code unit sequence"))
}
