use tracing::warn;

use crate::error::AnalyzeError;

/// Extract the text layer of every page of a PDF, concatenated in page
/// order with no inserted separator. Scanned/image-only documents come back
/// effectively empty; that is not an error here, downstream scoring clamps
/// the length and the renderer reports the missing vocabulary.
///
/// The byte buffer is the only handle on the document; nothing stays open
/// past this call on any exit path.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, AnalyzeError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|err| AnalyzeError::DocumentRead(err.to_string()))?;

    if text.trim().is_empty() {
        warn!("document has no extractable text layer, it may be scanned or image-based");
    }

    Ok(text)
}
