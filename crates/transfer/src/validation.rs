use std::path::{Component, Path};

use crate::TransferError;

/// Validates the name a file is uploaded under.
///
/// The server stores uploads by bare file name, so the name must be a single
/// normal path component. Rejects:
/// - Empty or whitespace-only names
/// - Any directory separator or absolute path
/// - `.` and `..`
pub fn validate_file_name(name: &str) -> Result<(), TransferError> {
    if name.trim().is_empty() {
        return Err(TransferError::InvalidName("empty name".into()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(TransferError::InvalidName(format!(
            "directory separator not allowed: {name}"
        )));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(TransferError::InvalidName(format!(
            "not a plain file name: {name}"
        ))),
    }
}
