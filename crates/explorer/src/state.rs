use crdrive_protocol::constants::view_path;
use crdrive_protocol::{EntityKind, ShareTarget};
use crdrive_transfer::size_badge;

use crate::dnd::{DragMove, DropArea};
use crate::menu::{Command, ContextMenu, FabMenu};
use crate::modal::{InitialModals, ModalKind};

/// One card of the explorer grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub target: ShareTarget,
    pub name: String,
    /// Byte size; folders have none.
    pub size: Option<u64>,
}

impl Entity {
    /// `"(1.50 KB)"` badge, files only.
    pub fn badge(&self) -> Option<String> {
        self.size.map(size_badge)
    }
}

/// UI state of one explorer page. Owned by the front-end.
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    pub fab: FabMenu,
    pub context_menu: ContextMenu,
    pub drag: DragMove,
    pub drop_area: DropArea,
    pending: Vec<ModalKind>,
}

impl ExplorerState {
    pub fn new(initial: InitialModals) -> Self {
        Self {
            pending: initial.modals(),
            ..Default::default()
        }
    }

    /// Modals requested by the server for this load. Drained once.
    pub fn take_initial_modals(&mut self) -> Vec<ModalKind> {
        std::mem::take(&mut self.pending)
    }

    /// Click anywhere on the document outside both menus.
    pub fn click_outside(&mut self) {
        self.fab.click_outside();
        self.context_menu.click_outside();
    }

    /// Double-click on a grid card. Opens files in their viewer.
    pub fn double_click(&self, entity: ShareTarget) -> Option<Command> {
        match entity.kind {
            EntityKind::File => Some(Command::OpenUrl(view_path(entity.id))),
            EntityKind::Folder => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Position;

    #[test]
    fn initial_modals_drained_once() {
        let mut state = ExplorerState::new(InitialModals {
            show_move_modal: true,
            ..Default::default()
        });
        assert_eq!(state.take_initial_modals(), vec![ModalKind::Move]);
        assert!(state.take_initial_modals().is_empty());
    }

    #[test]
    fn outside_click_closes_both_menus() {
        let mut state = ExplorerState::default();
        state.fab.toggle();
        state.context_menu.open(ShareTarget::file(1), Position { x: 5, y: 5 });
        state.click_outside();
        assert!(!state.fab.is_open());
        assert!(!state.context_menu.is_visible());
    }

    #[test]
    fn double_click_opens_files_only() {
        let state = ExplorerState::default();
        assert_eq!(
            state.double_click(ShareTarget::file(12)),
            Some(Command::OpenUrl("/storage/view/12/".into()))
        );
        assert_eq!(state.double_click(ShareTarget::folder(12)), None);
    }

    #[test]
    fn badges() {
        let file = Entity {
            target: ShareTarget::file(1),
            name: "notes.txt".into(),
            size: Some(1536),
        };
        let folder = Entity {
            target: ShareTarget::folder(2),
            name: "Docs".into(),
            size: None,
        };
        assert_eq!(file.badge().as_deref(), Some("(1.50 KB)"));
        assert_eq!(folder.badge(), None);
    }
}
