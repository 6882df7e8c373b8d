//! Floating action menu and the per-entity context menu.

use crdrive_protocol::constants::view_path;
use crdrive_protocol::{EntityKind, ShareTarget};
use tracing::debug;

use crate::modal::{ModalKind, ModalRequest};

/// The floating "+" button menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FabMenu {
    open: bool,
}

impl FabMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Document click that hit neither the button nor the menu.
    pub fn click_outside(&mut self) {
        self.open = false;
    }
}

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Entries of the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    View,
    Rename,
    Move,
    Remove,
}

/// What the front-end must do after a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a URL in a new window.
    OpenUrl(String),
    ShowModal(ModalRequest),
}

/// Right-click menu over an explorer entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    target: Option<ShareTarget>,
    position: Position,
    visible: bool,
}

impl ContextMenu {
    pub fn open(&mut self, target: ShareTarget, position: Position) {
        debug!(entity = %target, x = position.x, y = position.y, "context menu opened");
        self.target = Some(target);
        self.position = position;
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Entity the menu was last opened on. Kept after the menu closes.
    pub fn target(&self) -> Option<ShareTarget> {
        self.target
    }

    pub fn click_outside(&mut self) {
        self.visible = false;
    }

    /// Runs `action` against the current target and closes the menu.
    ///
    /// `View` only applies to files.
    pub fn activate(&mut self, action: MenuAction) -> Option<Command> {
        self.visible = false;
        let target = self.target?;
        match action {
            MenuAction::View => match target.kind {
                EntityKind::File => Some(Command::OpenUrl(view_path(target.id))),
                EntityKind::Folder => None,
            },
            MenuAction::Rename => Some(modal(ModalKind::Rename, target)),
            MenuAction::Move => Some(modal(ModalKind::Move, target)),
            MenuAction::Remove => Some(modal(ModalKind::Remove, target)),
        }
    }
}

fn modal(kind: ModalKind, target: ShareTarget) -> Command {
    Command::ShowModal(ModalRequest::for_target(kind, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[test]
    fn fab_toggles_and_closes_outside() {
        let mut fab = FabMenu::default();
        fab.toggle();
        assert!(fab.is_open());
        fab.toggle();
        assert!(!fab.is_open());
        fab.toggle();
        fab.click_outside();
        assert!(!fab.is_open());
    }

    #[test]
    fn view_opens_file_url() {
        let mut menu = ContextMenu::default();
        menu.open(ShareTarget::file(42), at(10, 20));
        assert!(menu.is_visible());
        assert_eq!(menu.position(), at(10, 20));

        let cmd = menu.activate(MenuAction::View);
        assert_eq!(cmd, Some(Command::OpenUrl("/storage/view/42/".into())));
        assert!(!menu.is_visible());
    }

    #[test]
    fn view_on_folder_just_closes() {
        let mut menu = ContextMenu::default();
        menu.open(ShareTarget::folder(3), at(0, 0));
        assert_eq!(menu.activate(MenuAction::View), None);
        assert!(!menu.is_visible());
    }

    #[test]
    fn actions_carry_target() {
        let mut menu = ContextMenu::default();
        menu.open(ShareTarget::folder(9), at(1, 1));
        let Some(Command::ShowModal(req)) = menu.activate(MenuAction::Remove) else {
            panic!("expected modal");
        };
        assert_eq!(req.kind, ModalKind::Remove);
        assert_eq!(req.target, Some(ShareTarget::folder(9)));
        assert_eq!(req.destination, None);

        // Target survives closing; the next action still applies to it.
        let Some(Command::ShowModal(req)) = menu.activate(MenuAction::Move) else {
            panic!("expected modal");
        };
        assert_eq!(req.kind, ModalKind::Move);
    }

    #[test]
    fn no_target_no_command() {
        let mut menu = ContextMenu::default();
        assert_eq!(menu.activate(MenuAction::Rename), None);
    }
}
