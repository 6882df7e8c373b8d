use std::path::Path;

use tracing::debug;

use crate::TransferError;
use crate::types::FileHandle;

/// Ordered, immutable set of files picked for one upload.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    files: Vec<FileHandle>,
}

impl FileSelection {
    pub fn new(files: Vec<FileHandle>) -> Self {
        Self { files }
    }

    /// Builds a selection from paths on disk, keeping their order.
    ///
    /// Fails on the first path that is missing, is not a regular file or
    /// has a name the server would not accept.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, TransferError> {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(FileHandle::from_path(path.as_ref())?);
        }
        let selection = Self { files };
        debug!(
            files = selection.len(),
            total_bytes = selection.total_bytes(),
            "selection built"
        );
        Ok(selection)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileHandle> {
        self.files.iter()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(FileHandle::size).sum()
    }
}

impl FromIterator<FileHandle> for FileSelection {
    fn from_iter<I: IntoIterator<Item = FileHandle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
