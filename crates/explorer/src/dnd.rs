//! Drag-and-drop: moving entities onto folders, and the upload drop area.

use std::collections::HashSet;

use crdrive_protocol::{EntityKind, ShareTarget};
use crdrive_transfer::{FileSelection, format_file_size};
use tracing::debug;

use crate::modal::{ModalKind, ModalRequest};

/// Drag state of the entity grid.
#[derive(Debug, Clone, Default)]
pub struct DragMove {
    dragged: Option<ShareTarget>,
    highlighted: HashSet<ShareTarget>,
}

impl DragMove {
    pub fn drag_start(&mut self, entity: ShareTarget) {
        self.dragged = Some(entity);
    }

    pub fn dragged(&self) -> Option<ShareTarget> {
        self.dragged
    }

    pub fn drag_over(&mut self, entity: ShareTarget) {
        self.highlighted.insert(entity);
    }

    pub fn drag_leave(&mut self, entity: ShareTarget) {
        self.highlighted.remove(&entity);
    }

    pub fn is_highlighted(&self, entity: ShareTarget) -> bool {
        self.highlighted.contains(&entity)
    }

    /// Drop onto `onto`. Returns a Move request with `onto` preselected
    /// when it is a folder other than the dragged entity.
    pub fn drop_on(&mut self, onto: ShareTarget) -> Option<ModalRequest> {
        self.highlighted.remove(&onto);
        let dragged = self.dragged?;
        if onto.kind != EntityKind::Folder || onto == dragged {
            return None;
        }
        debug!(entity = %dragged, destination = onto.id, "drop onto folder");
        Some(ModalRequest {
            kind: ModalKind::Move,
            target: Some(dragged),
            destination: Some(onto.id),
        })
    }

    pub fn drag_end(&mut self) {
        self.dragged = None;
        self.highlighted.clear();
    }
}

/// Upload drop area: highlight plus the current file selection.
#[derive(Debug, Clone, Default)]
pub struct DropArea {
    highlighted: bool,
    selection: FileSelection,
}

impl DropArea {
    pub fn drag_over(&mut self) {
        self.highlighted = true;
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Files dropped on the area. An empty drop keeps the selection.
    pub fn drop_files(&mut self, files: FileSelection) {
        self.highlighted = false;
        if !files.is_empty() {
            self.selection = files;
        }
    }

    /// Files chosen through the picker replace the selection.
    pub fn pick(&mut self, files: FileSelection) {
        self.selection = files;
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    /// One `"{name} ({size})"` line per selected file.
    pub fn selected_lines(&self) -> Vec<String> {
        self.selection
            .iter()
            .map(|f| format!("{} ({})", f.name(), format_file_size(f.size())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crdrive_transfer::FileHandle;

    fn selection(files: &[(&str, usize)]) -> FileSelection {
        files
            .iter()
            .map(|(n, len)| FileHandle::from_bytes(*n, vec![0u8; *len]).unwrap())
            .collect()
    }

    #[test]
    fn drop_on_folder_preselects_destination() {
        let mut dnd = DragMove::default();
        dnd.drag_start(ShareTarget::file(5));
        dnd.drag_over(ShareTarget::folder(8));
        assert!(dnd.is_highlighted(ShareTarget::folder(8)));

        let req = dnd.drop_on(ShareTarget::folder(8)).unwrap();
        assert_eq!(req.kind, ModalKind::Move);
        assert_eq!(req.target, Some(ShareTarget::file(5)));
        assert_eq!(req.destination, Some(8));
        assert!(!dnd.is_highlighted(ShareTarget::folder(8)));
    }

    #[test]
    fn drop_on_file_or_self_ignored() {
        let mut dnd = DragMove::default();
        dnd.drag_start(ShareTarget::folder(2));
        assert!(dnd.drop_on(ShareTarget::file(3)).is_none());
        assert!(dnd.drop_on(ShareTarget::folder(2)).is_none());
    }

    #[test]
    fn drop_without_drag_ignored() {
        let mut dnd = DragMove::default();
        assert!(dnd.drop_on(ShareTarget::folder(1)).is_none());
    }

    #[test]
    fn drag_end_clears_state() {
        let mut dnd = DragMove::default();
        dnd.drag_start(ShareTarget::file(1));
        dnd.drag_over(ShareTarget::folder(4));
        dnd.drag_leave(ShareTarget::folder(4));
        dnd.drag_over(ShareTarget::folder(6));
        dnd.drag_end();
        assert!(dnd.dragged().is_none());
        assert!(!dnd.is_highlighted(ShareTarget::folder(6)));
    }

    #[test]
    fn drop_area_lists_files() {
        let mut area = DropArea::default();
        assert!(area.selected_lines().is_empty());

        area.drag_over();
        area.drop_files(selection(&[("a.txt", 10), ("b.bin", 2048)]));
        assert!(!area.is_highlighted());
        assert_eq!(area.selected_lines(), vec!["a.txt (10 bytes)", "b.bin (2.00 KB)"]);

        area.pick(selection(&[("c.txt", 1)]));
        assert_eq!(area.selection().len(), 1);
    }

    #[test]
    fn empty_drop_keeps_selection() {
        let mut area = DropArea::default();
        area.pick(selection(&[("keep.txt", 3)]));
        area.drop_files(FileSelection::default());
        assert_eq!(area.selected_lines(), vec!["keep.txt (3 bytes)"]);
    }
}
