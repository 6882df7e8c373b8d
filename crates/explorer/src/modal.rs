use serde::Deserialize;

use crdrive_protocol::ShareTarget;

/// Modals the explorer page can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Upload,
    NewFolder,
    Rename,
    Move,
    Remove,
}

/// Request to open a modal, pre-filled with its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRequest {
    pub kind: ModalKind,
    /// Entity the modal acts on. `None` for page-level modals.
    pub target: Option<ShareTarget>,
    /// Folder preselected in the Move modal's destination picker.
    pub destination: Option<u64>,
}

impl ModalRequest {
    pub fn for_target(kind: ModalKind, target: ShareTarget) -> Self {
        Self {
            kind,
            target: Some(target),
            destination: None,
        }
    }
}

/// Flags the server renders into the page when a form submission failed
/// validation and its modal must be shown again on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InitialModals {
    pub show_upload_modal: bool,
    pub show_folder_modal: bool,
    pub show_rename_modal: bool,
    pub show_move_modal: bool,
    pub show_remove_modal: bool,
}

impl InitialModals {
    /// Modals to open at load, in page order.
    pub fn modals(&self) -> Vec<ModalKind> {
        [
            (self.show_upload_modal, ModalKind::Upload),
            (self.show_folder_modal, ModalKind::NewFolder),
            (self.show_rename_modal, ModalKind::Rename),
            (self.show_move_modal, ModalKind::Move),
            (self.show_remove_modal, ModalKind::Remove),
        ]
        .into_iter()
        .filter_map(|(on, kind)| on.then_some(kind))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_no_modals() {
        assert!(InitialModals::default().modals().is_empty());
    }

    #[test]
    fn flags_from_page_json() {
        let flags: InitialModals =
            serde_json::from_str(r#"{"show_rename_modal": true, "show_upload_modal": true}"#)
                .unwrap();
        assert_eq!(flags.modals(), vec![ModalKind::Upload, ModalKind::Rename]);
    }
}
