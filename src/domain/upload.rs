//! Upload intake: validate a picked file and place it in its slot

use crate::errors::UploadError;
use crate::schemas::{CandidateProfile, FileRef, MAX_UPLOAD_BYTES, UPLOAD_SLOTS};

/// Check a file against the type and size limits, type first.
pub fn validate_video(file: &FileRef) -> Result<(), UploadError> {
    if file.format().is_none() {
        return Err(UploadError::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(UploadError::FileTooLarge {
            size: file.size,
            max: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Accept `file` into slot `index`.
///
/// The input profile is never touched. On success a new profile with the
/// slot set is returned; on any failure the caller keeps its old profile.
pub fn accept_upload(
    index: usize,
    file: FileRef,
    profile: &CandidateProfile,
) -> Result<CandidateProfile, UploadError> {
    if index >= UPLOAD_SLOTS {
        return Err(UploadError::SlotOutOfRange(index));
    }
    validate_video(&file)?;
    Ok(profile.clone().with_upload(index, file))
}
